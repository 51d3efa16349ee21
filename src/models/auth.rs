//! Authentication-related data models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Form-encoded login credentials, in the shape of an OAuth2 password grant
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Must be `password` when present
    pub grant_type: Option<String>,
    /// Accepted and ignored
    pub scope: Option<String>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            grant_type: None,
            scope: None,
        }
    }
}

/// Access token issued after a successful login
#[derive(Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Claims carried inside an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Request model for token validation
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct TokenValidationRequest {
    pub token: String,
}

/// Response model for token validation
#[derive(Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct TokenValidationResponse {
    pub valid: bool,
    pub user_id: Option<String>,
    pub message: String,
}
