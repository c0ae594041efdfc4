//! User endpoint handlers.
//!
//! Both handlers are pass-throughs: deserialize the input, call the injected
//! service once, return its result as the response body. No validation and no
//! error handling happens here; service errors propagate to the hosting
//! layer's status mapping via `?`.

use axum::{
    Json,
    extract::{Path, State},
};
use foyer_core::{SignUpRequest, User};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Create a user from an email signup payload
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> AppResult<Json<User>> {
    let user = state.user_service.sign_up_by_email(request).await?;

    Ok(Json(user))
}

/// Look up a user by the identifier in the path
///
/// The identifier is forwarded as the raw path string; the service decides
/// what it means.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&id).await?;

    Ok(Json(user))
}
