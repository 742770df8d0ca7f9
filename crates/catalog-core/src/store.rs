//! In-memory catalog storage.
//!
//! Stands in for the relational store behind the [`ArticleStore`] and
//! [`CategoryStore`] seams: bulk id lookups with absent ids omitted. Also
//! the indexer's source of rows, each article joined with its categories.

use std::collections::HashMap;

use crate::error::Result;
use crate::traits::{ArticleStore, CategoryStore, Indexable};
use crate::types::{Article, ArticleId, Category, CategoryId, IndexedArticle};

#[derive(Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
    article_categories: HashMap<ArticleId, Vec<CategoryId>>,
    categories: Vec<Category>,
}

/// One article joined with its categories, ready for indexing.
#[derive(Debug, Clone)]
pub struct IndexRow {
    pub article: Article,
    pub categories: Vec<Category>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn add_article(&mut self, article: Article, category_ids: Vec<CategoryId>) {
        self.article_categories.insert(article.id, category_ids);
        self.articles.push(article);
    }

    /// Removes a category row, leaving any index references dangling.
    /// Models index/storage drift for the resolver to filter.
    pub fn remove_category(&mut self, id: CategoryId) {
        self.categories.retain(|c| c.id != id);
    }

    /// All articles joined with their categories, in insertion order.
    #[must_use]
    pub fn index_rows(&self) -> Vec<IndexRow> {
        self.articles
            .iter()
            .map(|article| {
                let ids = self
                    .article_categories
                    .get(&article.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let categories = self
                    .categories
                    .iter()
                    .filter(|c| ids.contains(&c.id))
                    .cloned()
                    .collect();
                IndexRow { article: article.clone(), categories }
            })
            .collect()
    }
}

impl ArticleStore for MemoryStore {
    fn find_by_ids(&self, ids: &[ArticleId]) -> Result<Vec<Article>> {
        Ok(self
            .articles
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }
}

impl CategoryStore for MemoryStore {
    fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}

impl Indexable for IndexRow {
    fn doc_id(&self) -> ArticleId {
        self.article.id
    }

    fn as_indexed_doc(&self) -> IndexedArticle {
        IndexedArticle {
            id: self.article.id,
            name: self.article.name.clone(),
            author_name: self.article.author.name.clone(),
            category_names: self.categories.iter().map(|c| c.name.clone()).collect(),
            category_ids: self.categories.iter().map(|c| c.id).collect(),
        }
    }
}
