//! MongoDB-backed stores.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::store::{ProjectStore, StoreError, UserStore};
use crate::{
    config::DatabaseConfig,
    models::{Project, ProjectType, User},
};

pub const USERS_COLLECTION: &str = "users";
pub const PROJECTS_COLLECTION: &str = "projects";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Process-wide database handle
///
/// The driver pools connections internally; cloning only clones the handle.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to the configured deployment and select the database
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        info!(database = %config.database, "Connected to MongoDB");
        Ok(Self {
            db: client.database(&config.database),
        })
    }

    /// Create the indexes the stores rely on; safe to run on every start
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique_username = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.db
            .collection::<UserDocument>(USERS_COLLECTION)
            .create_index(unique_username)
            .await?;

        let by_owner = IndexModel::builder()
            .keys(doc! { "owner": 1, "created_at": -1 })
            .build();
        self.db
            .collection::<ProjectDocument>(PROJECTS_COLLECTION)
            .create_index(by_owner)
            .await?;

        Ok(())
    }

    pub fn users(&self) -> MongoUserStore {
        MongoUserStore {
            db: self.db.clone(),
            collection: self.db.collection(USERS_COLLECTION),
        }
    }

    pub fn projects(&self) -> MongoProjectStore {
        MongoProjectStore {
            collection: self.db.collection(PROJECTS_COLLECTION),
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    username: String,
    hashed_password: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            username: doc.username,
            hashed_password: doc.hashed_password,
        }
    }
}

#[derive(Clone)]
pub struct MongoUserStore {
    db: Database,
    collection: Collection<UserDocument>,
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(found.map(User::from))
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let doc = UserDocument {
            username: user.username,
            hashed_password: user.hashed_password,
        };
        match self.collection.insert_one(&doc).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate(doc.username)),
            Err(e) => Err(e.into()),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Stored shape of a project; `created_at` is kept as epoch milliseconds so
/// the owner index sorts chronologically.
#[derive(Debug, Serialize, Deserialize)]
struct ProjectDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    project_type: ProjectType,
    owner: String,
    created_at: i64,
}

impl From<&Project> for ProjectDocument {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            project_type: project.project_type,
            owner: project.owner.clone(),
            created_at: project.created_at.timestamp_millis(),
        }
    }
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            project_type: doc.project_type,
            owner: doc.owner,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at).unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
pub struct MongoProjectStore {
    collection: Collection<ProjectDocument>,
}

#[async_trait]
impl ProjectStore for MongoProjectStore {
    async fn insert(&self, project: &Project) -> Result<(), StoreError> {
        match self.collection.insert_one(ProjectDocument::from(project)).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate(project.id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Project>, StoreError> {
        let cursor = self
            .collection
            .find(doc! { "owner": owner })
            .sort(doc! { "created_at": -1 })
            .await?;
        let docs: Vec<ProjectDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Project::from).collect())
    }

    async fn find_for_owner(&self, owner: &str, id: &str) -> Result<Option<Project>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id, "owner": owner })
            .await?;
        Ok(found.map(Project::from))
    }
}
