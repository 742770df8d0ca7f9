//! Executes structured queries against the tantivy index.

use std::path::Path;

use tantivy::collector::{FacetCollector, TopDocs};
use tantivy::query::{AllQuery, BooleanQuery, Occur, Query, RegexQuery};
use tantivy::schema::{Facet, Value};
use tantivy::{Index, IndexReader, TantivyDocument};
use tracing::debug;

use catalog_core::config::SearchConfig;
use catalog_core::error::{Error, Result};
use catalog_core::traits::SearchEngine;
use catalog_core::types::{Bucket, EngineResponse, QueryClause, SearchQuery};

use crate::tantivy_utils::{
    facet_category_id, register_tokenizer, AUTHOR_NAME_FIELD, CATEGORIES_FIELD,
    CATEGORY_FACET_ROOT, CATEGORY_NAMES_FIELD, ID_FIELD, NAME_FIELD,
};

/// Read-only executor over an existing index. Holds the reader and field
/// handles; every call runs one search returning hits in ranking order
/// plus the category buckets.
pub struct SearchExecutor {
    reader: IndexReader,
    max_facet_buckets: usize,
    id_field: tantivy::schema::Field,
    name_field: tantivy::schema::Field,
    author_name_field: tantivy::schema::Field,
    category_names_field: tantivy::schema::Field,
}

impl SearchExecutor {
    pub fn open(index_dir: &Path, search: &SearchConfig) -> Result<Self> {
        let index = Index::open_in_dir(index_dir)
            .map_err(|e| Error::SearchEngineUnavailable(e.to_string()))?;
        register_tokenizer(&index);
        let reader = index
            .reader()
            .map_err(|e| Error::SearchEngineUnavailable(e.to_string()))?;

        let schema = index.schema();
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| Error::SearchEngineUnavailable(e.to_string()))
        };
        Ok(Self {
            reader,
            max_facet_buckets: search.max_facet_buckets,
            id_field: field(ID_FIELD)?,
            name_field: field(NAME_FIELD)?,
            author_name_field: field(AUTHOR_NAME_FIELD)?,
            category_names_field: field(CATEGORY_NAMES_FIELD)?,
        })
    }

    /// Translates the engine-agnostic clause into a tantivy query. Each
    /// wildcard token becomes a `.*token.*` regex over the three text
    /// fields; the tokens and fields are all ORed, mirroring default
    /// query-string semantics.
    fn translate(&self, clause: &QueryClause) -> Result<Box<dyn Query>> {
        match clause {
            QueryClause::MatchAll => Ok(Box::new(AllQuery)),
            QueryClause::QueryString(text) => {
                let mut subqueries: Vec<(Occur, Box<dyn Query>)> = Vec::new();
                for token in text.split_whitespace() {
                    let inner = token.trim_matches('*').to_lowercase();
                    if inner.is_empty() {
                        continue;
                    }
                    let pattern = format!(".*{}.*", regex_escape(&inner));
                    for field in [
                        self.name_field,
                        self.author_name_field,
                        self.category_names_field,
                    ] {
                        let query = RegexQuery::from_pattern(&pattern, field)
                            .map_err(|e| Error::SearchEngineQueryError(e.to_string()))?;
                        subqueries.push((Occur::Should, Box::new(query)));
                    }
                }
                // Tokens made solely of wildcard markers leave nothing to
                // match against; treat that as match-all.
                if subqueries.is_empty() {
                    return Ok(Box::new(AllQuery));
                }
                Ok(Box::new(BooleanQuery::new(subqueries)))
            }
        }
    }
}

impl SearchEngine for SearchExecutor {
    fn search(&self, query: &SearchQuery) -> Result<EngineResponse> {
        let searcher = self.reader.searcher();
        let tantivy_query = self.translate(&query.clause)?;

        let mut facet_collector = FacetCollector::for_field(CATEGORIES_FIELD);
        facet_collector.add_facet(Facet::from(CATEGORY_FACET_ROOT));
        let collectors = (
            TopDocs::with_limit(query.size).and_offset(query.from),
            facet_collector,
        );
        let (top_docs, facet_counts) = searcher
            .search(&tantivy_query, &collectors)
            .map_err(|e| Error::SearchEngineUnavailable(e.to_string()))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| Error::SearchEngineUnavailable(e.to_string()))?;
            if let Some(id) = doc.get_first(self.id_field).and_then(|v| v.as_u64()) {
                hits.push(id);
            }
        }

        let mut buckets: Vec<Bucket> = facet_counts
            .get(CATEGORY_FACET_ROOT)
            .filter_map(|(facet, count)| {
                facet_category_id(facet).map(|key| Bucket { key, doc_count: count })
            })
            .collect();
        // Deterministic bucket cap: biggest counts first, ties by key.
        buckets.sort_by(|a, b| b.doc_count.cmp(&a.doc_count).then(a.key.cmp(&b.key)));
        buckets.truncate(self.max_facet_buckets);

        debug!(hits = hits.len(), buckets = buckets.len(), "executed query");
        Ok(EngineResponse { hits, buckets })
    }
}

/// Backslash-escapes ASCII regex metacharacters; everything else is
/// matched literally by the term-level regex.
fn regex_escape(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len() * 2);
    for c in token.chars() {
        if c.is_ascii() && !c.is_ascii_alphanumeric() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
