use thiserror::Error;

/// Failures surfaced by the search pipeline. Drift between the index and
/// storage (a hit or bucket id with no stored row) is not an error and is
/// filtered in the resolver/assembler instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("search engine unavailable: {0}")]
    SearchEngineUnavailable(String),

    #[error("search engine rejected query: {0}")]
    SearchEngineQueryError(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
