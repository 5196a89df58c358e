//! Domain types shared by the vector, lexical and full-text search paths.

use serde::{Deserialize, Serialize};

pub type DocId = i64;

/// Chunk metadata is opaque JSON; the core only ever serializes it back to
/// text for substring matching.
pub type Metadata = serde_json::Value;

/// Composite identity of a hit within one query's result set.
/// `None` chunk index marks a whole-document match.
pub type HitKey = (DocId, Option<u32>);

/// A stored legal document. Owns zero or more chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    /// Locator string, e.g. a file path or URL.
    pub source: String,
    pub content: String,
    /// Format tag such as "txt" or "html".
    pub format: String,
}

/// A contiguous slice of a document's text, independently embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub doc_id: DocId,
    pub chunk_index: u32,
    pub vector: Vec<f32>,
    pub metadata: Option<Metadata>,
}

/// Unranked candidate produced by a single search path. Ephemeral.
#[derive(Debug, Clone)]
pub struct RawHit {
    pub doc_id: DocId,
    pub chunk_index: Option<u32>,
    /// Raw engine score: ascending cosine distance on the vector path,
    /// constant 1.0 on the lexical path.
    pub score: f32,
    pub text: String,
    pub source: String,
    pub format: String,
    pub metadata: Option<Metadata>,
}

impl RawHit {
    pub fn key(&self) -> HitKey {
        (self.doc_id, self.chunk_index)
    }
}

/// A candidate annotated with normalized and composite scores.
/// Created transiently per query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredHit {
    pub doc_id: DocId,
    pub chunk_index: Option<u32>,
    pub text: String,
    pub source: String,
    pub format: String,
    pub metadata: Option<Metadata>,
    /// Raw cosine distance from the vector path, 0.0 for lexical-only hits.
    pub vector_score: f32,
    /// Binary lexical match indicator.
    pub lexical_score: f32,
    /// Min-max inverted vector score, bounded [0,1] within one query.
    pub vector_score_norm: f32,
    pub hybrid_score: f32,
    /// `"{source}#chunk{chunk_index or 0}"`
    pub citation: String,
}

/// Which column family a full-text hit matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchArea {
    Documents,
    Metadata,
}

/// Scope selector for `full_text_search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtsMode {
    Documents,
    Metadata,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DedupKind {
    Document,
    Chunk,
}

/// Identity used to collapse multiple full-text hits onto one logical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub kind: DedupKind,
    pub doc_id: DocId,
}

/// Candidate from the whole-document/metadata full-text path.
#[derive(Debug, Clone)]
pub struct FtsHit {
    pub doc_id: DocId,
    /// `None` for direct content matches; set for per-chunk metadata matches.
    pub chunk_index: Option<u32>,
    pub source: String,
    /// Full document content, carried for display on both areas.
    pub content: String,
    /// The matched text: document content or the serialized chunk metadata.
    pub text: String,
    pub format: Option<String>,
    pub area: SearchArea,
}

impl FtsHit {
    /// Both areas key on the owning document so a content match and a
    /// metadata match for the same document collapse onto one result.
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey { kind: DedupKind::Document, doc_id: self.doc_id }
    }
}

/// One chunk joined with its owning document's fields, as yielded by a
/// backend's brute-force scan.
#[derive(Debug, Clone)]
pub struct ChunkRecord {
    pub doc_id: DocId,
    pub chunk_index: u32,
    pub vector: Vec<f32>,
    pub text: String,
    pub source: String,
    pub format: String,
    pub metadata: Option<Metadata>,
}
