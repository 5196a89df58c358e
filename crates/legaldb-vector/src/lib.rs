//! legaldb-vector
//!
//! Vector wire codec and the distance engines (exact brute-force scan and
//! backend-delegated approximate search).

pub mod codec;
pub mod distance;

pub use distance::{cosine_distance, select_engine, DistanceEngine, ExactScanEngine, IndexAssistedEngine};
