//! Configuration loading and path helpers.
//!
//! Merges `config.toml` + `config.<env>.toml` (selected by `RUST_ENV`) +
//! `APP_*` environment variables into a typed [`Config`]. Tests use
//! `Config::default()` and never touch the filesystem.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::types::RESULT_CAP;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub index: IndexConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory holding the tantivy index. `~` and `${VAR}` are expanded.
    pub dir: String,
    pub writer_heap_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed result-size cap; pagination beyond it is unsupported.
    pub result_cap: usize,
    /// Explicit cap on aggregation buckets. Buckets are ordered by
    /// descending count (key ascending on ties) before truncation, so
    /// very high category cardinality degrades deterministically.
    pub max_facet_buckets: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: IndexConfig {
                dir: "data/index".to_string(),
                writer_heap_bytes: 50_000_000,
            },
            search: SearchConfig {
                result_cap: RESULT_CAP,
                max_facet_buckets: 250,
            },
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        let config: Config = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.search.result_cap == 0 {
            return Err(anyhow::anyhow!("search.result_cap must be positive"));
        }
        if self.search.max_facet_buckets == 0 {
            return Err(anyhow::anyhow!("search.max_facet_buckets must be positive"));
        }
        Ok(())
    }

    #[must_use]
    pub fn index_dir(&self) -> PathBuf {
        expand_path(&self.index.dir)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
