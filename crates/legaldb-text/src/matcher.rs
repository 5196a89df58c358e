//! Keyword matching over the lexical storage collaborator.

use legaldb_core::error::Result;
use legaldb_core::traits::LexicalSearch;
use legaldb_core::types::RawHit;
use std::sync::Arc;

/// Case-insensitive substring containment, shared by the in-memory
/// backend and the metadata full-text scan.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Thin front over a [`LexicalSearch`] backend that enforces the lexical
/// scoring contract: a match is presence-only, so every hit carries a
/// constant 1.0 score and keys onto chunk 0 of its document. Backends
/// cannot leak partial-match magnitudes through this path.
#[derive(Clone)]
pub struct LexicalMatcher {
    store: Arc<dyn LexicalSearch>,
}

impl LexicalMatcher {
    pub fn new(store: Arc<dyn LexicalSearch>) -> Self {
        Self { store }
    }

    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<RawHit>> {
        let mut hits = self.store.lexical_search(query, top_k)?;
        for hit in &mut hits {
            hit.score = 1.0;
            if hit.chunk_index.is_none() {
                hit.chunk_index = Some(0);
            }
        }
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legaldb_core::types::DocId;

    struct FixedStore;

    impl LexicalSearch for FixedStore {
        fn lexical_search(&self, _query: &str, _top_k: usize) -> Result<Vec<RawHit>> {
            Ok(vec![RawHit {
                doc_id: 9 as DocId,
                chunk_index: None,
                score: 0.37, // a backend leaking a partial score
                text: "contract of sale".to_string(),
                source: "cases/9.txt".to_string(),
                format: "txt".to_string(),
                metadata: None,
            }])
        }
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("The Corporations Act 2001", "corporations act"));
        assert!(!contains_ci("The Corporations Act 2001", "migration act"));
    }

    #[test]
    fn matcher_forces_binary_score_and_chunk_zero() {
        let matcher = LexicalMatcher::new(Arc::new(FixedStore));
        let hits = matcher.search("sale", 5).expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 1.0);
        assert_eq!(hits[0].chunk_index, Some(0));
    }
}
