//! Authentication services: credential checks, token validation and the
//! bearer-token extractor used by protected routes.

use std::{
    future::{Ready, ready},
    sync::Arc,
};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use paperclip::actix::Apiv2Security;
use tracing::{debug, error};

use super::{
    password::{hash_password, verify_against_dummy, verify_password},
    state::AppState,
    store::UserStore,
    token::TokenIssuer,
};
use crate::models::{ApiError, AuthAuditEvent, AuthEventType, Claims, User};

/// Verifies credentials against the user store and issues access tokens
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Check a username/password pair and return a token for the user
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let user = self.users.find_by_username(username).await?;
        if user.is_none() {
            debug!(username = %username, "Login for unknown user");
        }

        let candidate = password.to_string();
        let stored = user.as_ref().map(|u| u.hashed_password.clone());
        let matches = web::block(move || match stored {
            Some(stored) => verify_password(&candidate, &stored),
            None => verify_against_dummy(&candidate),
        })
        .await
        .map_err(|e| ApiError::PasswordHash(e.to_string()))?;

        match user {
            Some(user) if matches => Ok(self.tokens.issue(&user.username)?),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    /// Hash `password` and store a new user record
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let plain = password.to_string();
        let hashed_password = web::block(move || hash_password(&plain))
            .await
            .map_err(|e| ApiError::PasswordHash(e.to_string()))??;

        self.users
            .insert(User {
                username: username.to_string(),
                hashed_password,
            })
            .await?;
        Ok(())
    }

    /// Decode and verify an access token
    pub fn validate(&self, token: &str) -> Result<Claims, ApiError> {
        self.tokens.validate(token).map_err(|e| {
            debug!(error = %e, "Access token rejected");
            ApiError::InvalidToken
        })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// The user identified by a valid bearer token on the request
#[derive(Debug, Clone, Apiv2Security)]
#[openapi(
    apiKey,
    in = "header",
    name = "Authorization",
    description = "Bearer access token from POST /api/login"
)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    fn from_http_request(req: &HttpRequest) -> Result<Self, ApiError> {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            error!("AppState missing from application data");
            return Err(ApiError::NotAuthenticated);
        };

        let result = bearer_token(req)
            .ok_or(ApiError::NotAuthenticated)
            .and_then(|token| state.auth.validate(token));

        match result {
            Ok(claims) => Ok(Self {
                username: claims.sub,
            }),
            Err(e) => {
                AuthAuditEvent::from_request(AuthEventType::AccessDenied, req)
                    .with_reason(e.to_string())
                    .log();
                Err(e)
            }
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}
