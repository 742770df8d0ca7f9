//! Loads matched articles, resolves facets and combines the final result.

use tracing::debug;

use crate::error::Result;
use crate::facets::FacetResolver;
use crate::query::QueryBuilder;
use crate::traits::{ArticleStore, CategoryStore, SearchEngine};
use crate::types::{ArticleId, Bucket, SearchOutcome};

/// Pairs engine hits with stored articles and buckets with stored
/// categories, producing the one [`SearchOutcome`] a request returns.
pub struct ResultAssembler<'a> {
    articles: &'a dyn ArticleStore,
    categories: &'a dyn CategoryStore,
}

impl<'a> ResultAssembler<'a> {
    #[must_use]
    pub fn new(articles: &'a dyn ArticleStore, categories: &'a dyn CategoryStore) -> Self {
        Self { articles, categories }
    }

    /// Bulk-loads the hit articles (author joined), drops hit ids that no
    /// longer exist in storage, sorts by article name ascending (byte-wise
    /// `str` ordering, case-sensitive) and attaches the resolved facets.
    pub fn assemble(&self, hits: &[ArticleId], buckets: &[Bucket]) -> Result<SearchOutcome> {
        let mut articles = self.articles.find_by_ids(hits)?;
        if articles.len() < hits.len() {
            debug!(hits = hits.len(), loaded = articles.len(), "dropped stale hit ids");
        }
        articles.sort_by(|a, b| a.name.cmp(&b.name));

        let categories = FacetResolver::new(self.categories).resolve(buckets)?;
        Ok(SearchOutcome { articles, categories })
    }
}

/// The per-request pipeline: build the query, execute it, assemble the
/// result. Stateless; every invocation constructs fresh query and result
/// objects.
pub struct SearchPipeline<'a> {
    engine: &'a dyn SearchEngine,
    query_builder: QueryBuilder,
    assembler: ResultAssembler<'a>,
}

impl<'a> SearchPipeline<'a> {
    #[must_use]
    pub fn new(
        engine: &'a dyn SearchEngine,
        articles: &'a dyn ArticleStore,
        categories: &'a dyn CategoryStore,
    ) -> Self {
        Self {
            engine,
            query_builder: QueryBuilder::default(),
            assembler: ResultAssembler::new(articles, categories),
        }
    }

    /// Replaces the default result cap with the configured one.
    #[must_use]
    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.query_builder = QueryBuilder::new(result_cap);
        self
    }

    pub fn search(&self, search_text: Option<&str>) -> Result<SearchOutcome> {
        let query = self.query_builder.build(search_text);
        let response = self.engine.search(&query)?;
        debug!(
            hits = response.hits.len(),
            buckets = response.buckets.len(),
            "engine response"
        );
        self.assembler.assemble(&response.hits, &response.buckets)
    }
}
