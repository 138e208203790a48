use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Operation not allowed: {0}")]
    Forbidden(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DomainError {
    /// Maps a repository write failure, turning a [`UniqueViolation`] into
    /// `AlreadyExists(what)`.
    pub fn from_write(err: anyhow::Error, what: impl FnOnce() -> String) -> Self {
        if err.is::<UniqueViolation>() {
            DomainError::AlreadyExists(what())
        } else {
            DomainError::Other(err)
        }
    }
}

/// Write rejected by a uniqueness constraint. Repositories return it inside
/// `anyhow::Error` so use cases can still report a conflict when a concurrent
/// write slips past their pre-check.
#[derive(Debug, Error)]
#[error("unique constraint violation on {constraint}")]
pub struct UniqueViolation {
    pub constraint: String,
}

pub type DomainResult<T> = Result<T, DomainError>;
