//! Storage abstractions for users and projects.
//!
//! Handlers only ever see these traits; the MongoDB implementation lives in
//! [`crate::services::mongo`] and an in-memory one in
//! [`crate::services::memory`].

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Project, User};

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a record with key '{0}' already exists")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Lookup and insertion of user records, keyed by username
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup on `username`
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user; fails with [`StoreError::Duplicate`] if the username is taken
    async fn insert(&self, user: User) -> Result<(), StoreError>;

    /// Round-trip to the backend to confirm it is reachable
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Persistence for projects, always scoped to their owner
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert(&self, project: &Project) -> Result<(), StoreError>;

    /// Projects owned by `owner`, newest first
    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Project>, StoreError>;

    async fn find_for_owner(&self, owner: &str, id: &str) -> Result<Option<Project>, StoreError>;
}
