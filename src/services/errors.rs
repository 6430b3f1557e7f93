use thiserror::Error;

use crate::domain::category::EntityValidationError;
use crate::repository::RepositoryError;

/// Generic error type used by service layer functions.
///
/// Both variants are transparent: the underlying error reaches the caller
/// with its message unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The aggregate rejected the supplied fields.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
    /// A persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
