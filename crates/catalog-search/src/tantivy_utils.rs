//! Static article schema and tokenizer registration.

use tantivy::schema::{
    Facet, FacetOptions, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, FAST, INDEXED,
    STORED,
};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, TextAnalyzer};
use tantivy::Index;

use catalog_core::types::CategoryId;

pub const TOKENIZER_NAME: &str = "article_text";

/// Facet path prefix under which one `/category/<id>` value is stored per
/// category association of an article.
pub const CATEGORY_FACET_ROOT: &str = "/category";

pub const ID_FIELD: &str = "id";
pub const NAME_FIELD: &str = "name";
pub const AUTHOR_NAME_FIELD: &str = "author_name";
pub const CATEGORY_NAMES_FIELD: &str = "category_names";
pub const CATEGORIES_FIELD: &str = "categories";

/// The indexed-document schema: a stored article id, three analyzed text
/// fields matching the indexed-document shape, and the category facet
/// field backing the aggregation.
#[must_use]
pub fn build_schema() -> Schema {
    let mut schema_builder = Schema::builder();

    let _id_field = schema_builder.add_u64_field(ID_FIELD, FAST | INDEXED | STORED);

    let text_field_indexing = TextFieldIndexing::default()
        .set_tokenizer(TOKENIZER_NAME)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let text_options = TextOptions::default().set_indexing_options(text_field_indexing);
    let _name_field = schema_builder.add_text_field(NAME_FIELD, text_options.clone());
    let _author_name_field = schema_builder.add_text_field(AUTHOR_NAME_FIELD, text_options.clone());
    let _category_names_field = schema_builder.add_text_field(CATEGORY_NAMES_FIELD, text_options);

    let _categories_field = schema_builder.add_facet_field(CATEGORIES_FIELD, FacetOptions::default());

    schema_builder.build()
}

/// Splitting + lowercasing only. Wildcard tokens are lowercased on the
/// query side to match, so search is case-insensitive without stemming.
pub fn register_tokenizer(index: &Index) {
    let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .build();
    index.tokenizers().register(TOKENIZER_NAME, tokenizer);
}

#[must_use]
pub fn category_facet(id: CategoryId) -> Facet {
    Facet::from(format!("{CATEGORY_FACET_ROOT}/{id}").as_str())
}

/// Parses the category id back out of a `/category/<id>` facet. Facets
/// outside that shape yield `None`.
#[must_use]
pub fn facet_category_id(facet: &Facet) -> Option<CategoryId> {
    let path = facet.to_string();
    let rest = path.strip_prefix(CATEGORY_FACET_ROOT)?;
    rest.strip_prefix('/')?.parse().ok()
}
