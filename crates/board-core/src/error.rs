//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;
use crate::ports::PasswordError;

/// Domain errors - business logic failures surfaced by [`crate::PostService`].
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: id {id}")]
    NotFound { id: PostId },

    #[error("Password does not match")]
    InvalidPassword,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
