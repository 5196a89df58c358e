//! Cosine distance and the two distance engine implementations.

use legaldb_core::config::DistanceMode;
use legaldb_core::error::Result;
use legaldb_core::traits::{ChunkScan, VectorSearch};
use legaldb_core::types::RawHit;
use std::cmp::Ordering;
use std::sync::Arc;

/// Cosine distance `1 - cosine_similarity`, range [0,2]. Lower is more
/// similar. A degenerate side (empty or zero magnitude) yields exactly
/// 1.0: maximally dissimilar but never undefined. Mismatched lengths pair
/// over the shorter prefix.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 1.0;
    }
    let n = a.len().min(b.len());
    let mut dot = 0.0f64;
    let mut na = 0.0f64;
    let mut nb = 0.0f64;
    for i in 0..n {
        let x = f64::from(a[i]);
        let y = f64::from(b[i]);
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na <= 0.0 || nb <= 0.0 {
        return 1.0;
    }
    (1.0 - dot / (na.sqrt() * nb.sqrt())) as f32
}

/// Capability interface for nearest-neighbor retrieval. Implementations
/// return hits sorted ascending by cosine distance; exact ties keep the
/// backend's insertion order.
pub trait DistanceEngine: Send + Sync {
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<RawHit>>;
}

/// Exact mode: scan every stored chunk and compute the distance in-core.
pub struct ExactScanEngine<S> {
    store: Arc<S>,
}

impl<S> ExactScanEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: ChunkScan> DistanceEngine for ExactScanEngine<S> {
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<RawHit>> {
        let mut hits: Vec<RawHit> = self
            .store
            .scan_chunks()?
            .into_iter()
            .map(|rec| RawHit {
                doc_id: rec.doc_id,
                chunk_index: Some(rec.chunk_index),
                score: cosine_distance(query, &rec.vector),
                text: rec.text,
                source: rec.source,
                format: rec.format,
                metadata: rec.metadata,
            })
            .collect();
        // Stable sort: equal distances keep scan order.
        hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);
        tracing::debug!(candidates = hits.len(), top_k, "exact scan complete");
        Ok(hits)
    }
}

/// Approximate mode: hand the query to the backend's native search and let
/// it use whatever index structure it has.
pub struct IndexAssistedEngine<S> {
    store: Arc<S>,
}

impl<S> IndexAssistedEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: VectorSearch> DistanceEngine for IndexAssistedEngine<S> {
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<RawHit>> {
        self.store.vector_search(query, top_k, true)
    }
}

/// Wire up the configured distance engine over a storage backend.
pub fn select_engine<S>(mode: DistanceMode, store: Arc<S>) -> Arc<dyn DistanceEngine>
where
    S: ChunkScan + VectorSearch + 'static,
{
    match mode {
        DistanceMode::Exact => Arc::new(ExactScanEngine::new(store)),
        DistanceMode::Approximate => Arc::new(IndexAssistedEngine::new(store)),
    }
}
