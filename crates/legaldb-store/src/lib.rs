//! legaldb-store
//!
//! Reference storage backend: an in-memory document/chunk store with JSON
//! snapshot persistence. Production deployments swap in a database-backed
//! implementation of the same `legaldb-core` traits.

pub mod memory;

pub use memory::MemoryStore;
