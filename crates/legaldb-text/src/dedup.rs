//! Collapse multiple full-text hits onto one logical result per key.

use legaldb_core::types::{DedupKey, FtsHit, SearchArea};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Precedence: the first hit inserted for a key wins, except when both the
/// existing and the incoming hit come from the metadata area, where the
/// lower chunk index wins. A missing chunk index always loses to a defined
/// one. Document-area hits are never displaced once inserted.
///
/// Output order is first-seen key order truncated to `top_k`; this path
/// intentionally has no relevance ranking.
pub fn reduce(hits: Vec<FtsHit>, top_k: usize) -> Vec<FtsHit> {
    let mut order: Vec<DedupKey> = Vec::new();
    let mut grouped: HashMap<DedupKey, FtsHit> = HashMap::new();
    for hit in hits {
        let key = hit.dedup_key();
        match grouped.entry(key) {
            Entry::Vacant(slot) => {
                order.push(key);
                slot.insert(hit);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get();
                if hit.area == SearchArea::Metadata
                    && existing.area == SearchArea::Metadata
                    && chunk_rank(hit.chunk_index) < chunk_rank(existing.chunk_index)
                {
                    slot.insert(hit);
                }
            }
        }
    }
    order
        .into_iter()
        .filter_map(|key| grouped.remove(&key))
        .take(top_k)
        .collect()
}

// Missing index sorts as infinitely large.
fn chunk_rank(index: Option<u32>) -> u64 {
    index.map_or(u64::MAX, u64::from)
}
