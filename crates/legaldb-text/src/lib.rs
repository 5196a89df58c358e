//! legaldb-text
//!
//! Lexical substring matching and the unranked full-text path (documents,
//! chunk metadata, dedup reducer).

pub mod dedup;
pub mod fts;
pub mod matcher;

pub use fts::FullTextSearcher;
pub use matcher::LexicalMatcher;
