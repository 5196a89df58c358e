//! Configuration loader and typed search settings.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `LEGALDB_*`
//! env vars. Backend selection and search tuning live in an explicit
//! [`SearchConfig`] object handed to the engine at construction; there is
//! no ambient process-global backend state.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("LEGALDB_").split("__"));

        Ok(Self { figment })
    }

    /// Typed `[search]` section; absent keys fall back to defaults.
    pub fn search(&self) -> SearchConfig {
        self.figment.extract_inner("search").unwrap_or_default()
    }
}

/// How the distance engine obtains nearest neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Brute-force scan, cosine computed in-core.
    Exact,
    /// Delegate to the backend's native search with the approximate flag set.
    Approximate,
}

/// Which raw vector scores join the min-max normalization pool.
///
/// `All` reproduces the historical behavior: lexical-only entries carry a
/// forced 0.0 raw distance and skew the pool (a lexical-only hit normalizes
/// like a perfect vector match). `VectorHits` excludes them and assigns
/// them a 0.0 normalized score instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormPool {
    All,
    VectorHits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub embedding_dim: usize,
    pub distance_mode: DistanceMode,
    /// Default weight of the normalized vector score in the composite.
    pub alpha: f32,
    /// Per-side over-fetch factor for the hybrid path.
    pub hybrid_fetch_multiplier: usize,
    /// Over-fetch factors for the full-text path, applied before dedup.
    pub fts_document_multiplier: usize,
    pub fts_metadata_multiplier: usize,
    pub norm_pool: NormPool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            embedding_dim: 768,
            distance_mode: DistanceMode::Exact,
            alpha: 0.5,
            hybrid_fetch_multiplier: 2,
            fts_document_multiplier: 4,
            fts_metadata_multiplier: 8,
            norm_pool: NormPool::All,
        }
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
