use std::{fmt, sync::Arc};

use foyer_core::UserService;

use crate::infra::config::Config;

/// Shared handles every handler can reach through the `State` extractor.
///
/// The user service is injected at construction time; handlers never build
/// their own collaborator.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>, config: Arc<Config>) -> Self {
        Self {
            user_service,
            config,
        }
    }
}
