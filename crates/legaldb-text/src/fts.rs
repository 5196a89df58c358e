//! Whole-document and chunk-metadata full-text search.

use crate::dedup;
use legaldb_core::error::Result;
use legaldb_core::traits::FullTextStore;
use legaldb_core::types::{FtsHit, FtsMode};
use std::sync::Arc;

/// Runs the substring searches for the requested areas, over-fetching each
/// side so the dedup pass still has `top_k` distinct documents to hand
/// back, then reduces by dedup key.
#[derive(Clone)]
pub struct FullTextSearcher {
    store: Arc<dyn FullTextStore>,
    document_multiplier: usize,
    metadata_multiplier: usize,
}

impl FullTextSearcher {
    pub fn new(store: Arc<dyn FullTextStore>, document_multiplier: usize, metadata_multiplier: usize) -> Self {
        Self { store, document_multiplier, metadata_multiplier }
    }

    pub fn search(&self, query: &str, top_k: usize, mode: FtsMode) -> Result<Vec<FtsHit>> {
        let mut hits: Vec<FtsHit> = Vec::new();
        if matches!(mode, FtsMode::Documents | FtsMode::Both) {
            hits.extend(self.store.fts_documents(query, top_k * self.document_multiplier)?);
        }
        if matches!(mode, FtsMode::Metadata | FtsMode::Both) {
            hits.extend(self.store.fts_metadata(query, top_k * self.metadata_multiplier)?);
        }
        tracing::debug!(candidates = hits.len(), top_k, ?mode, "full-text candidates before dedup");
        Ok(dedup::reduce(hits, top_k))
    }
}
