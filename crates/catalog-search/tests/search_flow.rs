use std::path::Path;

use catalog_core::assemble::SearchPipeline;
use catalog_core::config::Config;
use catalog_core::seed::{BEBOP, COOL, FUSION, JAZZ};
use catalog_core::store::MemoryStore;
use catalog_core::traits::SearchEngine;
use catalog_core::types::{Article, Author, Category, CategoryFacet};
use catalog_search::{ArticleIndexer, SearchExecutor};

/// The 8-album fixture: 4 albums tagged jazz+fusion, 4 tagged
/// jazz+cool+bebop.
fn fixture_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for (id, name) in [
        (JAZZ, "jazz"),
        (FUSION, "jazz fusion"),
        (BEBOP, "bebop"),
        (COOL, "cool jazz"),
    ] {
        store.add_category(Category { id, name: name.to_string() });
    }
    let davis = Author { id: 1, name: "Miles Davis".to_string() };
    let albums: [(&str, &[u64]); 8] = [
        ("Bitches Brew", &[JAZZ, FUSION]),
        ("A Tribute to Jack Johnson", &[JAZZ, FUSION]),
        ("Miles In The Sky", &[JAZZ, FUSION]),
        ("Pangaea", &[JAZZ, FUSION]),
        ("Kind of Blue", &[JAZZ, COOL, BEBOP]),
        ("Sketches Of Spain", &[JAZZ, COOL, BEBOP]),
        ("Birth of the Cool", &[JAZZ, COOL, BEBOP]),
        ("Porgy And Bess", &[JAZZ, COOL, BEBOP]),
    ];
    for (i, (name, category_ids)) in albums.iter().enumerate() {
        store.add_article(
            Article {
                id: i as u64 + 1,
                name: (*name).to_string(),
                author: davis.clone(),
            },
            category_ids.to_vec(),
        );
    }
    store
}

fn build_index(store: &MemoryStore, index_dir: &Path) -> SearchExecutor {
    let config = Config::default();
    let indexer =
        ArticleIndexer::create(index_dir, config.index.writer_heap_bytes).expect("indexer");
    let count = indexer.index_all(&store.index_rows()).expect("index rows");
    assert_eq!(count, 8);
    SearchExecutor::open(index_dir, &config.search).expect("executor")
}

fn facet_count(facets: &[CategoryFacet], name: &str) -> Option<u64> {
    facets
        .iter()
        .find(|f| f.category.name == name)
        .map(|f| f.match_count)
}

#[test]
fn blank_search_returns_the_whole_catalog_faceted() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    for blank in [None, Some(""), Some("   ")] {
        let outcome = pipeline.search(blank).expect("search");
        let names: Vec<&str> = outcome.articles.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "A Tribute to Jack Johnson",
                "Birth of the Cool",
                "Bitches Brew",
                "Kind of Blue",
                "Miles In The Sky",
                "Pangaea",
                "Porgy And Bess",
                "Sketches Of Spain",
            ],
            "blank {blank:?}"
        );
        assert_eq!(outcome.categories.len(), 4);
        assert_eq!(facet_count(&outcome.categories, "jazz"), Some(8));
        assert_eq!(facet_count(&outcome.categories, "jazz fusion"), Some(4));
        assert_eq!(facet_count(&outcome.categories, "cool jazz"), Some(4));
        assert_eq!(facet_count(&outcome.categories, "bebop"), Some(4));
    }
}

#[test]
fn text_search_narrows_articles_and_facets() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    let outcome = pipeline.search(Some("Kind")).expect("search");
    let names: Vec<&str> = outcome.articles.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Kind of Blue"]);
    assert_eq!(outcome.categories.len(), 3);
    assert_eq!(facet_count(&outcome.categories, "jazz"), Some(1));
    assert_eq!(facet_count(&outcome.categories, "cool jazz"), Some(1));
    assert_eq!(facet_count(&outcome.categories, "bebop"), Some(1));
    assert_eq!(facet_count(&outcome.categories, "jazz fusion"), None);
}

#[test]
fn search_matches_author_and_category_fields() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    // Author name reaches every album.
    let by_author = pipeline.search(Some("Davis")).expect("search");
    assert_eq!(by_author.articles.len(), 8);

    // Category names are part of the indexed document too.
    let by_category = pipeline.search(Some("fusion")).expect("search");
    assert_eq!(by_category.articles.len(), 4);
    assert_eq!(facet_count(&by_category.categories, "jazz fusion"), Some(4));
}

#[test]
fn search_is_case_insensitive_and_substring_based() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    for text in ["KIND", "kin", "IND"] {
        let outcome = pipeline.search(Some(text)).expect("search");
        let names: Vec<&str> = outcome.articles.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Kind of Blue"], "text {text:?}");
    }
}

#[test]
fn repeated_identical_searches_are_idempotent() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    let first = pipeline.search(Some("blue")).expect("search");
    let second = pipeline.search(Some("blue")).expect("search");
    assert_eq!(first.articles, second.articles);
    let mut a = first.categories.clone();
    let mut b = second.categories.clone();
    a.sort_by_key(|f| f.category.id);
    b.sort_by_key(|f| f.category.id);
    assert_eq!(a, b);
}

#[test]
fn category_deleted_after_indexing_is_silently_omitted() {
    let mut store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    store.remove_category(BEBOP);
    let pipeline = SearchPipeline::new(&executor, &store, &store);

    let outcome = pipeline.search(None).expect("search");
    assert_eq!(outcome.articles.len(), 8);
    assert_eq!(outcome.categories.len(), 3);
    assert_eq!(facet_count(&outcome.categories, "bebop"), None);
    assert_eq!(facet_count(&outcome.categories, "jazz"), Some(8));
}

#[test]
fn configured_result_cap_limits_returned_articles_not_facets() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());
    let pipeline = SearchPipeline::new(&executor, &store, &store).with_result_cap(3);

    let outcome = pipeline.search(None).expect("search");
    assert_eq!(outcome.articles.len(), 3);
    // Facet counts cover every matched document, not just the returned page.
    assert_eq!(facet_count(&outcome.categories, "jazz"), Some(8));
}

#[test]
fn raw_engine_response_keeps_ranking_order_and_distinct_buckets() {
    let store = fixture_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let executor = build_index(&store, dir.path());

    let query = catalog_core::query::QueryBuilder::default().build(Some("jazz"));
    let response = executor.search(&query).expect("engine search");
    assert!(!response.hits.is_empty());
    let mut keys: Vec<u64> = response.buckets.iter().map(|b| b.key).collect();
    let distinct = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), distinct, "one bucket per category id");
}
