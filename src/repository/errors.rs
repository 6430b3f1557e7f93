use thiserror::Error;

/// Failures surfaced by repository and unit-of-work implementations.
///
/// The core treats these as opaque: they are never wrapped, retried or
/// recovered from, only propagated to the use-case caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The storage backend rejected or failed the operation.
    #[error("storage error: {0}")]
    Storage(String),
    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

/// Convenient alias for results returned from persistence ports.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
