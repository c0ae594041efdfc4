//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The credential is never part of this record; implementations keep password
/// hashes in their own storage so they cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Email address the account was registered with
    pub email: String,
    /// Timestamp of account creation
    pub created_at: DateTime<Utc>,
    /// Timestamp of last profile update
    pub updated_at: DateTime<Utc>,
}

/// Payload accepted when registering a user by email.
///
/// The shape is owned by the [`crate::service::UserService`] contract; the
/// HTTP layer deserializes it and passes it through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Email address to register
    pub email: String,
    /// Plaintext credential; hashed by the service before storage
    pub password: String,
}
