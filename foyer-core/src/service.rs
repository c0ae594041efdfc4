//! User service contract and the in-memory reference implementation.
//!
//! The HTTP layer in `foyer-server` is a thin shim over [`UserService`]; all
//! account semantics (credential hashing, uniqueness, lookup) live behind
//! this trait.

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::UserError,
    user::{SignUpRequest, User},
};

/// Contract the HTTP endpoints delegate to.
///
/// Implementations own the entire account lifecycle; callers pass requests
/// through verbatim and return results verbatim.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account from a signup payload.
    async fn sign_up_by_email(&self, request: SignUpRequest) -> Result<User, UserError>;

    /// Look up a user by the opaque identifier taken from the request path.
    ///
    /// The identifier arrives exactly as the caller sent it; implementations
    /// decide what it means.
    async fn get_user(&self, id: &str) -> Result<User, UserError>;
}

#[derive(Debug, Default)]
struct UserStore {
    users: HashMap<Uuid, User>,
    // Hashes live apart from User so they can never serialize into a response
    credentials: HashMap<Uuid, String>,
    by_email: HashMap<String, Uuid>,
}

/// Process-local [`UserService`] backend.
///
/// Holds accounts for the lifetime of the process. Credentials are hashed
/// with Argon2 before storage. There is no durable persistence; restarting
/// the server starts from an empty store.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    store: RwLock<UserStore>,
}

impl InMemoryUserService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_password(password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| UserError::Credential("Failed to hash password".to_string()))?
            .to_string();

        Ok(hash)
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn sign_up_by_email(&self, request: SignUpRequest) -> Result<User, UserError> {
        let mut store = self.store.write().await;

        if store.by_email.contains_key(&request.email) {
            return Err(UserError::EmailTaken(request.email));
        }

        let password_hash = Self::hash_password(&request.password)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: request.email,
            created_at: now,
            updated_at: now,
        };

        store.by_email.insert(user.email.clone(), user.id);
        store.credentials.insert(user.id, password_hash);
        store.users.insert(user.id, user.clone());

        info!("User created: {} ({})", user.email, user.id);

        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User, UserError> {
        let user_id =
            Uuid::parse_str(id).map_err(|_| UserError::NotFound(id.to_string()))?;

        let store = self.store.read().await;
        store
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}
