//! Client error types.

use gymdesk_shared::AppError;
use thiserror::Error;

/// Client-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// A required field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        Self::Validation(err.to_string())
    }
}
