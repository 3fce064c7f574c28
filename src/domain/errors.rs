use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
    #[error("Pro plan is already activated")]
    AlreadyPro,
    #[error("User has reached the limit of {limit} todos")]
    QuotaExceeded { limit: usize },
    /// Carries the credential that failed to resolve; empty when none was sent.
    #[error("No user with that username found")]
    UnknownUser(String),
    #[error("No todo found with id: {0}")]
    TodoNotFound(Uuid),
    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
