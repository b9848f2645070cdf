use color_eyre::eyre::Report;
use thiserror::Error;

use super::{AssignmentError, PolicyError};

#[derive(Debug, Error)]
pub enum AuthAPIError {
    #[error("Invalid credentials")]
    IncorrectCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Missing token")]
    MissingToken,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

/// Errors raised by the project and task handlers.
#[derive(Debug, Error)]
pub enum ProjectAPIError {
    #[error("Assignment rejected")]
    AssignmentError(#[from] AssignmentError),
    #[error("Authentication error")]
    AuthenticationError(#[from] AuthAPIError),
    #[error("Forbidden")]
    Forbidden(#[from] PolicyError),
    #[error("Resource with ID not found: {0}")]
    IDNotFoundError(uuid::Uuid),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl AsRef<str> for ValidationError {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
