use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, users::user_handlers};

/// Create the API route table.
///
/// Explicit {method, path} -> handler registration; anything not listed here
/// never reaches the user service.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/user", post(user_handlers::create_user_handler))
        .route("/user/{id}", get(user_handlers::get_user_handler))
}
