use std::{env, path::PathBuf};

use catalog_core::config::Config;
use catalog_core::store::MemoryStore;
use catalog_search::ArticleIndexer;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let index_dir = env::args()
        .nth(1)
        .map_or_else(|| config.index_dir(), PathBuf::from);

    println!("Catalog Indexer");
    println!("===============");
    println!("Index directory: {}", index_dir.display());

    let store = MemoryStore::seeded();
    let indexer = ArticleIndexer::create(&index_dir, config.index.writer_heap_bytes)?;
    let count = indexer.index_all(&store.index_rows())?;
    println!("Indexed {count} articles");
    println!("To search, use: cargo run --bin catalog-query '<text>'");
    Ok(())
}
