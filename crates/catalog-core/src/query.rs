//! Turns raw search text into a structured engine query.

use crate::types::{AggregationClause, QueryClause, SearchQuery, RESULT_CAP};

/// Builds the engine-agnostic [`SearchQuery`] for one request.
///
/// Blank text (absent, empty or whitespace-only) becomes a match-all
/// clause. Anything else is split on whitespace, each token wrapped in
/// `*` wildcard markers for substring-style matching, and rejoined with
/// single spaces into one free-text query string. Every query carries the
/// category-id aggregation, offset 0 and the configured result cap; no
/// input is an error.
pub struct QueryBuilder {
    result_cap: usize,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self { result_cap: RESULT_CAP }
    }
}

impl QueryBuilder {
    #[must_use]
    pub fn new(result_cap: usize) -> Self {
        Self { result_cap }
    }

    #[must_use]
    pub fn build(&self, search_text: Option<&str>) -> SearchQuery {
        SearchQuery {
            size: self.result_cap,
            from: 0,
            clause: Self::clause(search_text),
            aggregation: AggregationClause::by_categories(),
        }
    }

    fn clause(search_text: Option<&str>) -> QueryClause {
        match search_text {
            Some(text) if !text.trim().is_empty() => {
                QueryClause::QueryString(add_wildcards(text))
            }
            _ => QueryClause::MatchAll,
        }
    }
}

fn add_wildcards(text: &str) -> String {
    text.split_whitespace()
        .map(|token| format!("*{token}*"))
        .collect::<Vec<_>>()
        .join(" ")
}
