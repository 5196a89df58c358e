//! legaldb-hybrid
//!
//! Score normalization, the hybrid vector/lexical merger and the search
//! engine facade exposing the query API.

pub mod engine;
pub mod merge;
pub mod normalize;

pub use engine::SearchEngine;
pub use merge::{merge, MergeOptions};
