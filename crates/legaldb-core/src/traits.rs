//! Contracts between the retrieval core and its collaborators.
//!
//! Storage engines differ structurally (native distance primitives, index
//! usage, pagination), so the core only ever talks to them through these
//! traits. Any storage method may fail with `Error::StorageUnavailable`.

use crate::error::Result;
use crate::types::{ChunkRecord, FtsHit, RawHit};

/// Backend-native nearest-neighbor search, ascending by cosine distance.
///
/// `approximate = true` signals the backend may answer from an index
/// structure, trading exactness for speed. The core assumes nothing about
/// the index type, only that results stay sorted by the same metric.
pub trait VectorSearch: Send + Sync {
    fn vector_search(&self, query: &[f32], top_k: usize, approximate: bool) -> Result<Vec<RawHit>>;
}

/// Case-insensitive substring containment over document content.
/// Hit order is backend-determined; scores are presence-only.
pub trait LexicalSearch: Send + Sync {
    fn lexical_search(&self, query: &str, top_k: usize) -> Result<Vec<RawHit>>;
}

/// Substring search over whole documents and serialized chunk metadata,
/// feeding the unranked full-text path.
pub trait FullTextStore: Send + Sync {
    fn fts_documents(&self, query: &str, limit: usize) -> Result<Vec<FtsHit>>;
    fn fts_metadata(&self, query: &str, limit: usize) -> Result<Vec<FtsHit>>;
}

/// Full chunk scan for the exact brute-force distance engine.
pub trait ChunkScan: Send + Sync {
    fn scan_chunks(&self) -> Result<Vec<ChunkRecord>>;
}

/// Black-box text-to-vector mapping. Model invocation is external; the
/// core only relies on a fixed output dimension.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
