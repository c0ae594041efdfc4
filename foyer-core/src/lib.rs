//! # Foyer Core
//!
//! Core library for the Foyer user service, providing the user domain types
//! and the service contract the HTTP layer delegates to.
//!
//! ## Overview
//!
//! `foyer-core` is the foundation of the Foyer service, offering:
//!
//! - **User Types**: The [`user::User`] record and the [`user::SignUpRequest`]
//!   payload accepted on registration
//! - **Service Contract**: The [`service::UserService`] trait every backing
//!   implementation fulfills
//! - **Reference Backend**: [`service::InMemoryUserService`], a process-local
//!   implementation suitable for development and tests
//!
//! The HTTP surface lives in `foyer-server`; this crate knows nothing about
//! transports.

pub mod error;
pub mod service;
pub mod user;

pub use error::UserError;
pub use service::{InMemoryUserService, UserService};
pub use user::{SignUpRequest, User};
