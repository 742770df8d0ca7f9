//! Maps aggregation buckets to stored categories with their match counts.

use std::collections::HashMap;

use crate::error::Result;
use crate::traits::CategoryStore;
use crate::types::{Bucket, CategoryFacet, CategoryId};

/// Resolves engine buckets against category storage.
///
/// A bucket whose category id has no stored row is dropped silently: the
/// index is eventually consistent with storage and a category may have
/// been deleted after indexing. Output order is unspecified beyond
/// carrying no duplicates and no extras.
pub struct FacetResolver<'a> {
    categories: &'a dyn CategoryStore,
}

impl<'a> FacetResolver<'a> {
    #[must_use]
    pub fn new(categories: &'a dyn CategoryStore) -> Self {
        Self { categories }
    }

    pub fn resolve(&self, buckets: &[Bucket]) -> Result<Vec<CategoryFacet>> {
        let ids: Vec<CategoryId> = buckets.iter().map(|b| b.key).collect();
        let counts: HashMap<CategoryId, u64> =
            buckets.iter().map(|b| (b.key, b.doc_count)).collect();

        let facets = self
            .categories
            .find_by_ids(&ids)?
            .into_iter()
            .filter_map(|category| {
                counts.get(&category.id).map(|&match_count| CategoryFacet {
                    category,
                    match_count,
                })
            })
            .collect();
        Ok(facets)
    }
}
