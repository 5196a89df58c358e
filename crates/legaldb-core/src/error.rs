use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A storage collaborator could not be reached or failed mid-query.
    /// The hybrid path absorbs this at the merge boundary; narrow entry
    /// points surface it to the caller.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Embedding length or wire-encoding inconsistency.
    #[error("Malformed vector: {0}")]
    MalformedVector(String),

    /// Rejected before any I/O (e.g. alpha outside [0,1], zero top_k).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
