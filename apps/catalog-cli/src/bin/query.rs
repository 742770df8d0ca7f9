use std::env;

use catalog_core::assemble::SearchPipeline;
use catalog_core::config::Config;
use catalog_core::store::MemoryStore;
use catalog_core::types::SearchRequest;
use catalog_search::SearchExecutor;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut json = false;
    let mut text_parts: Vec<String> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            _ => text_parts.push(arg),
        }
    }
    let request = SearchRequest::new(if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(" "))
    });

    let store = MemoryStore::seeded();
    let executor = SearchExecutor::open(&config.index_dir(), &config.search)?;
    let pipeline = SearchPipeline::new(&executor, &store, &store)
        .with_result_cap(config.search.result_cap);
    let outcome = pipeline.search(request.text())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match request.text() {
        Some(text) => println!("Search: '{text}'"),
        None => println!("Search: (match all)"),
    }
    println!("\n{} article(s)", outcome.articles.len());
    for article in &outcome.articles {
        println!("  {:<45} by {}", article.name, article.author.name);
    }
    println!("\nCategories:");
    let mut facets = outcome.categories.clone();
    facets.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    for facet in &facets {
        println!("  {:<15} {}", facet.category.name, facet.match_count);
    }
    Ok(())
}
