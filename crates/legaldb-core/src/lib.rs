//! legaldb-core
//!
//! Shared domain types, storage collaborator traits, configuration and the
//! document chunker used by the search engines and the CLI.

pub mod chunker;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;
