//! legaldb-embed
//!
//! Embedding collaborator. Model inference lives outside this workspace;
//! callers that have a real model implement [`Embedder`] themselves. The
//! in-tree [`HashEmbedder`] is a deterministic token-hashing embedder that
//! keeps ingest and search self-contained for the CLI and tests.

use legaldb_core::error::Result;
use legaldb_core::traits::Embedder;
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

pub const DEFAULT_DIM: usize = 768;

/// Deterministic bag-of-hashed-tokens embedding, L2-normalized. Texts
/// sharing vocabulary land near each other, which is all the retrieval
/// tests and the offline CLI need.
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Embedder for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0f32; self.dim];
        for (i, token) in text.to_lowercase().split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = (v.iter().map(|x| x * x).sum::<f32>()).sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        Ok(v)
    }
}

pub fn get_default_embedder(dim: usize) -> Box<dyn Embedder> {
    Box::new(HashEmbedder::new(dim))
}
