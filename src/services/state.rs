//! Shared application state injected into every handler.

use std::sync::Arc;

use super::{
    auth::AuthService,
    memory::{InMemoryProjectStore, InMemoryUserStore},
    mongo::MongoStore,
    store::{ProjectStore, UserStore},
    token::TokenIssuer,
};
use crate::config::JwtConfig;

/// Explicitly constructed dependencies for the HTTP application
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        projects: Arc<dyn ProjectStore>,
        jwt: &JwtConfig,
    ) -> Self {
        let auth = AuthService::new(users.clone(), TokenIssuer::new(jwt));
        Self {
            users,
            projects,
            auth,
        }
    }

    /// State backed by the MongoDB `users` and `projects` collections
    pub fn with_mongo(store: &MongoStore, jwt: &JwtConfig) -> Self {
        Self::new(Arc::new(store.users()), Arc::new(store.projects()), jwt)
    }

    /// State backed by in-process maps
    pub fn in_memory(jwt: &JwtConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryProjectStore::new()),
            jwt,
        )
    }
}
