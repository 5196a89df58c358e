//! Dense textual wire form for embedding vectors.
//!
//! Engines bind vectors as the literal `"[v0,v1,...]"`. An empty vector
//! encodes to `"[]"`, never an error. Length is not validated here; a
//! dimension mismatch surfaces downstream in the distance engine's contract.

use legaldb_core::error::{Error, Result};
use std::fmt::Write;

pub fn encode(vector: &[f32]) -> String {
    let mut out = String::with_capacity(2 + vector.len() * 8);
    out.push('[');
    for (i, v) in vector.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{v}");
    }
    out.push(']');
    out
}

pub fn decode(wire: &str) -> Result<Vec<f32>> {
    let trimmed = wire.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::MalformedVector(format!("missing vector brackets in {trimmed:?}")))?
        .trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f32>()
                .map_err(|e| Error::MalformedVector(format!("bad component {token:?}: {e}")))
        })
        .collect()
}

/// Elementwise closeness within `eps`, for tests around 32-bit truncation.
pub fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
}
