//! Error type shared by every repository implementation.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures reported by the persistence layer, covering both the relational
/// and the local JSON backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not obtain a connection from the pool.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The database reported an error for this operation.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored document could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The local storage medium failed an I/O operation.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The local storage medium is not writable.
    #[error("local storage is not available")]
    StorageUnavailable,
    /// The local storage medium ran out of space or quota.
    #[error("local storage quota exceeded")]
    QuotaExceeded,
    /// A stored value violated a domain constraint while being loaded.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
