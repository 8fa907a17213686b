//! Shared gateway application state.

use std::sync::Arc;

use crate::tasks::TaskService;
use crate::user_auth::{TokenService, UserService};

/// State shared across all request handlers. All mutable state lives in the
/// storage collaborators behind the services; the gateway itself holds none.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub tasks: Arc<TaskService>,
    /// Token service, shared with the auth middleware.
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(users: Arc<UserService>, tasks: Arc<TaskService>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            tasks,
            tokens,
        }
    }
}
