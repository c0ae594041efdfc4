//! Error type for the user service contract.

use thiserror::Error;

/// Failures a [`crate::service::UserService`] implementation may surface.
///
/// The HTTP layer does not interpret these; it hands them to the hosting
/// framework's status mapping untouched.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, UserError>;
