//! # Foyer Server
//!
//! HTTP surface for the Foyer user service.
//!
//! The server is a thin routing shim built on Axum: each endpoint
//! deserializes its input, calls the injected [`foyer_core::UserService`]
//! once, and returns the result verbatim. All account semantics live behind
//! the service trait in `foyer-core`.

pub mod infra;
pub mod routes;
pub mod users;

pub use infra::app_state::AppState;
