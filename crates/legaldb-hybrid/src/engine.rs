//! Search engine facade: the exposed query API over the wired backends.

use crate::merge::{merge, MergeOptions};
use legaldb_core::config::SearchConfig;
use legaldb_core::error::{Error, Result};
use legaldb_core::traits::{Embedder, FullTextStore, LexicalSearch};
use legaldb_core::types::{FtsHit, FtsMode, RawHit, ScoredHit};
use legaldb_text::{FullTextSearcher, LexicalMatcher};
use legaldb_vector::DistanceEngine;
use std::sync::Arc;

/// One handle per configured backend wiring. Queries are stateless; the
/// engine holds no mutable state and every method takes `&self`.
pub struct SearchEngine {
    vector: Arc<dyn DistanceEngine>,
    matcher: LexicalMatcher,
    fts: FullTextSearcher,
    embedder: Arc<dyn Embedder>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(
        vector: Arc<dyn DistanceEngine>,
        lexical: Arc<dyn LexicalSearch>,
        fts: Arc<dyn FullTextStore>,
        embedder: Arc<dyn Embedder>,
        config: SearchConfig,
    ) -> Self {
        let fts = FullTextSearcher::new(
            fts,
            config.fts_document_multiplier,
            config.fts_metadata_multiplier,
        );
        Self { vector, matcher: LexicalMatcher::new(lexical), fts, embedder, config }
    }

    /// Weighted vector + lexical ranking.
    ///
    /// The two sub-queries run as parallel blocking tasks joined before the
    /// merge. A failed side degrades to an empty contribution; both sides
    /// failing yields an empty ranked list, never an error. Parameters are
    /// validated before any I/O.
    pub async fn hybrid_search(
        &self,
        query_text: &str,
        top_k: usize,
        alpha: f32,
    ) -> Result<Vec<ScoredHit>> {
        validate_top_k(top_k)?;
        validate_alpha(alpha)?;
        let query_vec = self.embedder.embed(query_text)?;

        let fetch = top_k * self.config.hybrid_fetch_multiplier;
        let vector = Arc::clone(&self.vector);
        let vector_task = tokio::task::spawn_blocking(move || vector.search(&query_vec, fetch));
        let matcher = self.matcher.clone();
        let query = query_text.to_string();
        let lexical_task = tokio::task::spawn_blocking(move || matcher.search(&query, fetch));

        let (vector_res, lexical_res) = tokio::join!(vector_task, lexical_task);
        let vector_hits = degrade("vector", vector_res);
        let lexical_hits = degrade("lexical", lexical_res);

        let opts = MergeOptions { alpha, norm_pool: self.config.norm_pool };
        Ok(merge(vector_hits, lexical_hits, &opts, top_k))
    }

    /// Nearest-neighbor ranking only, ascending by distance.
    pub fn vector_only_search(&self, query_text: &str, top_k: usize) -> Result<Vec<RawHit>> {
        validate_top_k(top_k)?;
        let query_vec = self.embedder.embed(query_text)?;
        self.vector.search(&query_vec, top_k)
    }

    /// Same ranking for callers that already hold an embedding.
    pub fn vector_search_raw(&self, query_vec: &[f32], top_k: usize) -> Result<Vec<RawHit>> {
        validate_top_k(top_k)?;
        self.vector.search(query_vec, top_k)
    }

    /// Substring matching only; hits carry the constant lexical score.
    pub fn lexical_only_search(&self, query_text: &str, top_k: usize) -> Result<Vec<RawHit>> {
        validate_top_k(top_k)?;
        self.matcher.search(query_text, top_k)
    }

    /// Unranked whole-document/metadata search with dedup, no scoring.
    pub fn full_text_search(&self, query_text: &str, top_k: usize, mode: FtsMode) -> Result<Vec<FtsHit>> {
        validate_top_k(top_k)?;
        self.fts.search(query_text, top_k, mode)
    }

    /// Default alpha from the engine's configuration.
    pub fn default_alpha(&self) -> f32 {
        self.config.alpha
    }
}

fn validate_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(Error::InvalidParameter("top_k must be positive".to_string()));
    }
    Ok(())
}

fn validate_alpha(alpha: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidParameter(format!("alpha must lie in [0,1], got {alpha}")));
    }
    Ok(())
}

/// Sub-query failures are absorbed here: the merge still runs with
/// whatever succeeded.
fn degrade(
    side: &str,
    joined: std::result::Result<Result<Vec<RawHit>>, tokio::task::JoinError>,
) -> Vec<RawHit> {
    match joined {
        Ok(Ok(hits)) => hits,
        Ok(Err(err)) => {
            tracing::warn!(side, %err, "sub-query failed, degrading to empty contribution");
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(side, %err, "sub-query task aborted, degrading to empty contribution");
            Vec::new()
        }
    }
}
