//! Health check endpoint handler.

use actix_web::HttpResponse;
use paperclip::actix::{api_v2_operation, web};
use tracing::warn;

use crate::{models::HealthResponse, services::AppState};

/// Health check endpoint
///
/// Pings the user store so load balancers see database outages.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Reports whether the API and its database are reachable.",
    tags("Health"),
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    match state.users.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
        }),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
            })
        }
    }
}
