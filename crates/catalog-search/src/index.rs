//! Index creation and bulk import of articles.

use std::path::Path;

use anyhow::Result;
use tantivy::{Index, IndexWriter, TantivyDocument};
use tracing::debug;

use catalog_core::traits::Indexable;

use crate::tantivy_utils::{
    build_schema, category_facet, register_tokenizer, AUTHOR_NAME_FIELD, CATEGORIES_FIELD,
    CATEGORY_NAMES_FIELD, ID_FIELD, NAME_FIELD,
};

/// Writes `Indexable` items into a freshly created directory index.
/// Creation force-replaces any existing index; incremental updates and
/// refreshes stay with the external index-lifecycle owner.
pub struct ArticleIndexer {
    index: Index,
    writer_heap_bytes: usize,
    id_field: tantivy::schema::Field,
    name_field: tantivy::schema::Field,
    author_name_field: tantivy::schema::Field,
    category_names_field: tantivy::schema::Field,
    categories_field: tantivy::schema::Field,
}

impl ArticleIndexer {
    pub fn create(index_dir: &Path, writer_heap_bytes: usize) -> Result<Self> {
        let schema = build_schema();
        if index_dir.exists() {
            std::fs::remove_dir_all(index_dir)?;
        }
        std::fs::create_dir_all(index_dir)?;
        let index = Index::create_in_dir(index_dir, schema.clone())?;
        register_tokenizer(&index);

        let id_field = schema.get_field(ID_FIELD)?;
        let name_field = schema.get_field(NAME_FIELD)?;
        let author_name_field = schema.get_field(AUTHOR_NAME_FIELD)?;
        let category_names_field = schema.get_field(CATEGORY_NAMES_FIELD)?;
        let categories_field = schema.get_field(CATEGORIES_FIELD)?;

        Ok(Self {
            index,
            writer_heap_bytes,
            id_field,
            name_field,
            author_name_field,
            category_names_field,
            categories_field,
        })
    }

    /// Indexes every item in one commit. Returns the document count.
    pub fn index_all<I: Indexable>(&self, items: &[I]) -> Result<usize> {
        let mut writer: IndexWriter = self.index.writer(self.writer_heap_bytes)?;
        for item in items {
            let indexed = item.as_indexed_doc();
            let mut doc = TantivyDocument::default();
            doc.add_u64(self.id_field, indexed.id);
            doc.add_text(self.name_field, &indexed.name);
            doc.add_text(self.author_name_field, &indexed.author_name);
            for category_name in &indexed.category_names {
                doc.add_text(self.category_names_field, category_name);
            }
            for category_id in &indexed.category_ids {
                doc.add_facet(self.categories_field, category_facet(*category_id));
            }
            writer.add_document(doc)?;
        }
        writer.commit()?;
        debug!(count = items.len(), "committed article index");
        Ok(items.len())
    }
}
