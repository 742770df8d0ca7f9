use crate::error::Result;
use crate::types::{
    Article, ArticleId, Category, CategoryId, EngineResponse, IndexedArticle, SearchQuery,
};

/// Anything that can be projected into the indexed-document shape.
pub trait Indexable: Send + Sync {
    fn doc_id(&self) -> ArticleId;
    fn as_indexed_doc(&self) -> IndexedArticle;
}

/// The engine seam: executes one structured query and returns hit ids in
/// ranking order plus raw aggregation buckets. Read-only, no retries.
pub trait SearchEngine: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<EngineResponse>;
}

/// Bulk article lookup with the author joined. Ids absent from storage
/// are omitted from the result, not an error.
pub trait ArticleStore: Send + Sync {
    fn find_by_ids(&self, ids: &[ArticleId]) -> Result<Vec<Article>>;
}

/// Bulk category lookup. Same omission semantics as [`ArticleStore`].
pub trait CategoryStore: Send + Sync {
    fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>>;
}
