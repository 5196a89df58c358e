//! In-memory storage backend.
//!
//! Brute-force implementations of the storage collaborator traits, plus a
//! JSON snapshot (`save`/`load`) so the CLI can persist an ingested corpus
//! between runs. Scans iterate documents in id order and chunks in insert
//! order, so every search is deterministic.

use legaldb_core::error::{Error, Result};
use legaldb_core::traits::{ChunkScan, FullTextStore, LexicalSearch, VectorSearch};
use legaldb_core::types::{Chunk, ChunkRecord, DocId, Document, FtsHit, Metadata, RawHit, SearchArea};
use legaldb_text::matcher::contains_ci;
use legaldb_vector::cosine_distance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Inner {
    next_doc_id: DocId,
    documents: BTreeMap<DocId, Document>,
    chunks: Vec<Chunk>,
}

pub struct MemoryStore {
    embedding_dim: usize,
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            inner: RwLock::new(Inner { next_doc_id: 1, ..Inner::default() }),
        }
    }

    /// Load a snapshot written by [`MemoryStore::save`].
    pub fn load(path: &Path, embedding_dim: usize) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::StorageUnavailable(format!("read {}: {e}", path.display())))?;
        let inner: Inner = serde_json::from_str(&raw)
            .map_err(|e| Error::StorageUnavailable(format!("parse {}: {e}", path.display())))?;
        Ok(Self { embedding_dim, inner: RwLock::new(inner) })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let inner = self.read()?;
        let raw = serde_json::to_string(&*inner)
            .map_err(|e| Error::StorageUnavailable(format!("serialize store: {e}")))?;
        std::fs::write(path, raw)
            .map_err(|e| Error::StorageUnavailable(format!("write {}: {e}", path.display())))
    }

    pub fn add_document(&self, source: &str, content: &str, format: &str) -> Result<DocId> {
        let mut inner = self.write()?;
        let id = inner.next_doc_id;
        inner.next_doc_id += 1;
        inner.documents.insert(
            id,
            Document {
                id,
                source: source.to_string(),
                content: content.to_string(),
                format: format.to_string(),
            },
        );
        Ok(id)
    }

    pub fn add_chunk(
        &self,
        doc_id: DocId,
        chunk_index: u32,
        vector: Vec<f32>,
        metadata: Option<Metadata>,
    ) -> Result<()> {
        if vector.len() != self.embedding_dim {
            return Err(Error::MalformedVector(format!(
                "expected dimension {}, got {}",
                self.embedding_dim,
                vector.len()
            )));
        }
        let mut inner = self.write()?;
        if !inner.documents.contains_key(&doc_id) {
            return Err(Error::InvalidParameter(format!("unknown document id {doc_id}")));
        }
        inner.chunks.push(Chunk { doc_id, chunk_index, vector, metadata });
        Ok(())
    }

    pub fn document_count(&self) -> Result<usize> {
        Ok(self.read()?.documents.len())
    }

    pub fn chunk_count(&self) -> Result<usize> {
        Ok(self.read()?.chunks.len())
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::StorageUnavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::StorageUnavailable("store lock poisoned".to_string()))
    }
}

impl ChunkScan for MemoryStore {
    fn scan_chunks(&self) -> Result<Vec<ChunkRecord>> {
        let inner = self.read()?;
        let mut records = Vec::with_capacity(inner.chunks.len());
        for chunk in &inner.chunks {
            // Chunks whose owning document vanished are skipped, not an error.
            let Some(doc) = inner.documents.get(&chunk.doc_id) else {
                continue;
            };
            records.push(ChunkRecord {
                doc_id: chunk.doc_id,
                chunk_index: chunk.chunk_index,
                vector: chunk.vector.clone(),
                text: doc.content.clone(),
                source: doc.source.clone(),
                format: doc.format.clone(),
                metadata: chunk.metadata.clone(),
            });
        }
        Ok(records)
    }
}

impl VectorSearch for MemoryStore {
    // The reference backend has no index structure; the approximate flag
    // is advisory and the answer is always the exact scan.
    fn vector_search(&self, query: &[f32], top_k: usize, _approximate: bool) -> Result<Vec<RawHit>> {
        let mut hits: Vec<RawHit> = self
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
        hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);
        Ok(hits)
    }
}

impl LexicalSearch for MemoryStore {
    fn lexical_search(&self, query: &str, top_k: usize) -> Result<Vec<RawHit>> {
        let inner = self.read()?;
        let hits = inner
            .documents
            .values()
            .filter(|doc| contains_ci(&doc.content, query))
            .take(top_k)
            .map(|doc| RawHit {
                doc_id: doc.id,
                chunk_index: Some(0),
                score: 1.0,
                text: doc.content.clone(),
                source: doc.source.clone(),
                format: doc.format.clone(),
                metadata: None,
            })
            .collect();
        Ok(hits)
    }
}

impl FullTextStore for MemoryStore {
    fn fts_documents(&self, query: &str, limit: usize) -> Result<Vec<FtsHit>> {
        let inner = self.read()?;
        let hits = inner
            .documents
            .values()
            .filter(|doc| contains_ci(&doc.content, query))
            .take(limit)
            .map(|doc| FtsHit {
                doc_id: doc.id,
                chunk_index: None,
                source: doc.source.clone(),
                content: doc.content.clone(),
                text: doc.content.clone(),
                format: Some(doc.format.clone()),
                area: SearchArea::Documents,
            })
            .collect();
        Ok(hits)
    }

    fn fts_metadata(&self, query: &str, limit: usize) -> Result<Vec<FtsHit>> {
        let inner = self.read()?;
        let mut hits = Vec::new();
        for chunk in &inner.chunks {
            if hits.len() >= limit {
                break;
            }
            let Some(metadata) = &chunk.metadata else {
                continue;
            };
            let serialized = metadata.to_string();
            if !contains_ci(&serialized, query) {
                continue;
            }
            let Some(doc) = inner.documents.get(&chunk.doc_id) else {
                continue;
            };
            hits.push(FtsHit {
                doc_id: chunk.doc_id,
                chunk_index: Some(chunk.chunk_index),
                source: doc.source.clone(),
                content: doc.content.clone(),
                text: serialized,
                format: None,
                area: SearchArea::Metadata,
            });
        }
        Ok(hits)
    }
}
