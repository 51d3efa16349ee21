//! Project models.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;

pub const MAX_PROJECT_NAME_LEN: usize = 100;

/// The kind of vision model a project trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Detection,
    Classification,
    Inspection,
    Ocr,
    Reid,
}

/// A project owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub project_type: ProjectType,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a new project for `owner`, validating the requested name
    pub fn create(owner: &str, request: CreateProjectRequest) -> Result<Self, ApiError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Project name must not be empty".into()));
        }
        if name.chars().count() > MAX_PROJECT_NAME_LEN {
            return Err(ApiError::Validation(format!(
                "Project name must be at most {MAX_PROJECT_NAME_LEN} characters"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            project_type: request.project_type,
            owner: owner.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Request body for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CreateProjectRequest {
    pub name: String,
    pub project_type: ProjectType,
}
