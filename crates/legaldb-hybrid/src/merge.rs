//! Union of vector and lexical hit sets into one ranked list.

use crate::normalize::min_max_inverted;
use legaldb_core::config::NormPool;
use legaldb_core::types::{HitKey, RawHit, ScoredHit};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Weight of the normalized vector score; the lexical indicator gets
    /// `1 - alpha`. Validated upstream to lie in [0,1].
    pub alpha: f32,
    pub norm_pool: NormPool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { alpha: 0.5, norm_pool: NormPool::All }
    }
}

struct Entry {
    hit: RawHit,
    vector_score: f32,
    lexical_score: f32,
    from_vector: bool,
}

/// Merge both candidate sets by `(doc_id, chunk_index)`:
///
/// 1. Seed from `vector_hits` (lexical score 0.0). A duplicate key within
///    the vector set keeps the last occurrence's hit and score; its
///    position in the insertion order stays where the key first appeared.
/// 2. Overlay `lexical_hits`: an existing key gains `lexical_score = 1.0`
///    (presence, not magnitude); a new key enters with `vector_score = 0.0`.
/// 3. Normalize the vector scores over the configured pool. With
///    `NormPool::All`, lexical-only entries join the pool with their forced
///    0.0 distance and skew it; with `NormPool::VectorHits` they are
///    excluded and take a 0.0 normalized score.
/// 4. `hybrid = alpha * norm + (1 - alpha) * lexical`.
/// 5. Stable sort descending (ties keep insertion order), truncate to
///    `top_k`, attach the citation label.
///
/// An empty side degrades to a ranking built from the other alone; both
/// empty yields an empty list. Merging the same inputs twice gives
/// identical output.
pub fn merge(
    vector_hits: Vec<RawHit>,
    lexical_hits: Vec<RawHit>,
    opts: &MergeOptions,
    top_k: usize,
) -> Vec<ScoredHit> {
    let mut index: HashMap<HitKey, usize> = HashMap::new();
    let mut entries: Vec<Entry> = Vec::with_capacity(vector_hits.len() + lexical_hits.len());

    for hit in vector_hits {
        let key = hit.key();
        let vector_score = hit.score;
        let entry = Entry { hit, vector_score, lexical_score: 0.0, from_vector: true };
        if let Some(&pos) = index.get(&key) {
            entries[pos] = entry;
        } else {
            index.insert(key, entries.len());
            entries.push(entry);
        }
    }

    for hit in lexical_hits {
        let key = hit.key();
        if let Some(&pos) = index.get(&key) {
            entries[pos].lexical_score = 1.0;
        } else {
            index.insert(key, entries.len());
            entries.push(Entry { hit, vector_score: 0.0, lexical_score: 1.0, from_vector: false });
        }
    }

    let norms = normalized_scores(&entries, opts.norm_pool);

    let mut scored: Vec<ScoredHit> = entries
        .into_iter()
        .zip(norms)
        .map(|(entry, vector_score_norm)| {
            let hybrid_score =
                opts.alpha * vector_score_norm + (1.0 - opts.alpha) * entry.lexical_score;
            ScoredHit {
                doc_id: entry.hit.doc_id,
                chunk_index: entry.hit.chunk_index,
                text: entry.hit.text,
                source: entry.hit.source,
                format: entry.hit.format,
                metadata: entry.hit.metadata,
                vector_score: entry.vector_score,
                lexical_score: entry.lexical_score,
                vector_score_norm,
                hybrid_score,
                citation: String::new(),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.hybrid_score.partial_cmp(&a.hybrid_score).unwrap_or(Ordering::Equal)
    });
    scored.truncate(top_k);
    for hit in &mut scored {
        hit.citation = format!("{}#chunk{}", hit.source, hit.chunk_index.unwrap_or(0));
    }
    scored
}

fn normalized_scores(entries: &[Entry], pool: NormPool) -> Vec<f32> {
    match pool {
        NormPool::All => {
            let scores: Vec<f32> = entries.iter().map(|e| e.vector_score).collect();
            min_max_inverted(&scores)
        }
        NormPool::VectorHits => {
            let pool_scores: Vec<f32> =
                entries.iter().filter(|e| e.from_vector).map(|e| e.vector_score).collect();
            let pool_norms = min_max_inverted(&pool_scores);
            let mut pool_iter = pool_norms.into_iter();
            entries
                .iter()
                .map(|e| if e.from_vector { pool_iter.next().unwrap_or(0.0) } else { 0.0 })
                .collect()
        }
    }
}
