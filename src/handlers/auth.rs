//! Authentication endpoint handlers.

use actix_web::{Error, HttpRequest, Result};
use paperclip::actix::{api_v2_operation, web};
use tracing::info;

use crate::{
    models::{
        ApiError, AuthAuditEvent, AuthEventType, LoginForm, TokenResponse, TokenValidationRequest,
        TokenValidationResponse,
    },
    services::{AppMetrics, AppState},
};

/// Mount the authentication routes on a scope
pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/validate").route(web::post().to(validate_token)));
}

/// User login endpoint
///
/// Looks the user up by username, verifies the password against the stored
/// hash and returns a signed bearer token whose subject is the username.
#[api_v2_operation(
    summary = "User Login",
    description = "Exchange form-encoded username and password for a bearer access token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Malformed form body")
    )
)]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<web::Json<TokenResponse>, Error> {
    let form = form.into_inner();

    if let Some(grant_type) = form.grant_type.as_deref()
        && grant_type != "password"
    {
        return Err(ApiError::Validation(format!(
            "Unsupported grant_type '{grant_type}', expected 'password'"
        ))
        .into());
    }

    let result = state.auth.login(&form.username, &form.password).await;

    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.record_login(result.is_ok());
    }

    match result {
        Ok(token) => {
            AuthAuditEvent::from_request(AuthEventType::LoginSuccess, &req)
                .with_username(&form.username)
                .log();
            Ok(web::Json(TokenResponse::bearer(token)))
        }
        Err(e) => {
            AuthAuditEvent::from_request(AuthEventType::LoginFailure, &req)
                .with_username(&form.username)
                .with_reason(e.to_string())
                .log();
            Err(e.into())
        }
    }
}

/// Token validation endpoint
///
/// Reports whether an access token is currently valid and, if so, whose it is.
#[api_v2_operation(
    summary = "Token Validation",
    description = "Validate an access token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Token validation result", body = TokenValidationResponse)
    )
)]
pub async fn validate_token(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<TokenValidationRequest>,
) -> Result<web::Json<TokenValidationResponse>, Error> {
    let response = match state.auth.validate(&payload.token) {
        Ok(claims) => {
            AuthAuditEvent::from_request(AuthEventType::TokenValidationSuccess, &req)
                .with_username(&claims.sub)
                .log();
            TokenValidationResponse {
                valid: true,
                user_id: Some(claims.sub),
                message: "Token is valid".to_string(),
            }
        }
        Err(e) => {
            AuthAuditEvent::from_request(AuthEventType::TokenValidationFailure, &req)
                .with_reason(e.to_string())
                .log();
            TokenValidationResponse {
                valid: false,
                user_id: None,
                message: "Invalid token".to_string(),
            }
        }
    };

    info!(valid = response.valid, "Token validated");
    Ok(web::Json(response))
}
