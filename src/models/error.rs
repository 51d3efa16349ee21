//! API error type and its HTTP mapping.

use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::services::{store::StoreError, token::TokenError};

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("token issuance failed: {0}")]
    TokenEncoding(#[from] TokenError),
}

impl ApiError {
    fn is_internal(&self) -> bool {
        matches!(
            self,
            ApiError::Store(_) | ApiError::PasswordHash(_) | ApiError::TokenEncoding(_)
        )
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials | ApiError::NotAuthenticated | ApiError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::PasswordHash(_) | ApiError::TokenEncoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = if self.is_internal() {
            error!(error = %self, "Request failed with an internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, ApiError::NotAuthenticated | ApiError::InvalidToken) {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(ErrorBody { detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("Project").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::Duplicate("alice".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bearer_challenge_only_on_token_errors() {
        let resp = ApiError::InvalidToken.error_response();
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let resp = ApiError::InvalidCredentials.error_response();
        assert!(resp.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("Project").to_string(), "Project not found");
    }
}
