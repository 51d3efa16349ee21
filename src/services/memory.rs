//! In-memory store implementations, used by tests and local development.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{ProjectStore, StoreError, UserStore};
use crate::models::{Project, User};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate(user.username));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert(&self, project: &Project) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(StoreError::Duplicate(project.id.clone()));
        }
        projects.push(project.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Project>, StoreError> {
        let mut owned: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_for_owner(&self, owner: &str, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id && p.owner == owner)
            .cloned())
    }
}
