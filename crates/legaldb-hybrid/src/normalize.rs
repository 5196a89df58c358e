//! Min-max inversion of raw vector distances.
//!
//! Rescales one query's unbounded distance scores onto [0,1] with smaller
//! distance mapping to a larger normalized score. The scale is local to a
//! single ranking pass; normalized scores from different queries are not
//! comparable.

/// `1 - (s - min)/(max - min)` per score. When every score in the set is
/// equal, each normalizes to 1.0. An empty set yields an empty output
/// (no division happens).
pub fn min_max_inverted(scores: &[f32]) -> Vec<f32> {
    if scores.is_empty() {
        return Vec::new();
    }
    let mut min = scores[0];
    let mut max = scores[0];
    for &s in &scores[1..] {
        min = min.min(s);
        max = max.max(s);
    }
    if max == min {
        return vec![1.0; scores.len()];
    }
    scores.iter().map(|&s| 1.0 - (s - min) / (max - min)).collect()
}
