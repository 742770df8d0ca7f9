//! catalog-search
//!
//! Tantivy-backed implementation of the catalog's search engine seam:
//! a static article schema, a bulk indexer, and the executor that turns
//! the engine-agnostic query into tantivy queries plus a facet-count
//! aggregation. See `index` and `executor`.

pub mod executor;
pub mod index;
pub mod tantivy_utils;

pub use executor::SearchExecutor;
pub use index::ArticleIndexer;
