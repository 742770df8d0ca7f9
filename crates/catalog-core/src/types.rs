//! Domain types shared by the stores, the query builder and the engine.

use serde::{Deserialize, Serialize};

pub type ArticleId = u64;
pub type AuthorId = u64;
pub type CategoryId = u64;

/// Default result-size cap. No pagination beyond the cap.
pub const RESULT_CAP: usize = 100;

/// Aggregation name and grouping field as they appear in the engine
/// request/response.
pub const CATEGORY_AGGREGATION: &str = "by_categories";
pub const CATEGORY_ID_FIELD: &str = "category_ids";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// A catalog article as storage returns it, with the author already
/// joined. Category associations live in storage and only reach the
/// engine through [`IndexedArticle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A category paired with the number of matched articles carrying it.
///
/// Deliberately a separate value object: the count is derived per request
/// and must never be written back through the persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub category: Category,
    pub match_count: u64,
}

/// Inbound request shape from the calling layer. A missing or blank
/// `search_text` is valid and means "match all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_text: Option<String>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(search_text: Option<String>) -> Self {
        Self { search_text }
    }

    /// The raw text, if any. Blankness is judged downstream by the query
    /// builder, not here.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }
}

/// The document shape handed to the indexer, one per article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedArticle {
    pub id: ArticleId,
    pub name: String,
    pub author_name: String,
    pub category_names: Vec<String>,
    pub category_ids: Vec<CategoryId>,
}

/// Engine-agnostic query: either match-all or a free-text query string
/// whose tokens carry `*` wildcard markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryClause {
    MatchAll,
    QueryString(String),
}

/// Term-counts aggregation request, grouped by `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationClause {
    pub name: String,
    pub field: String,
}

impl AggregationClause {
    #[must_use]
    pub fn by_categories() -> Self {
        Self {
            name: CATEGORY_AGGREGATION.to_string(),
            field: CATEGORY_ID_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub size: usize,
    pub from: usize,
    pub clause: QueryClause,
    pub aggregation: AggregationClause,
}

/// One aggregation bucket: a category id and the number of matched
/// articles tagged with it. The engine yields one bucket per distinct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: CategoryId,
    pub doc_count: u64,
}

/// What the engine hands back: hit ids in ranking order plus the raw
/// aggregation buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineResponse {
    pub hits: Vec<ArticleId>,
    pub buckets: Vec<Bucket>,
}

/// The sole output of one pipeline run: fully loaded articles ordered by
/// name ascending, and the resolved category facets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub articles: Vec<Article>,
    pub categories: Vec<CategoryFacet>,
}
