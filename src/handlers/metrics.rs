//! Metrics endpoint handler.

use crate::{config::MetricsConfig, services::AppMetrics};
use actix_web::{Error, HttpRequest, HttpResponse, Result};
use paperclip::actix::{api_v2_operation, web};

/// Prometheus metrics endpoint
#[api_v2_operation(
    summary = "Prometheus Metrics Endpoint",
    description = "Returns Prometheus-formatted request and login metrics.",
    tags("Metrics"),
    responses(
        (status = 200, description = "Prometheus metrics in text format", content_type = "text/plain"),
        (status = 503, description = "Metrics collection disabled")
    )
)]
pub async fn get_metrics(req: HttpRequest) -> Result<HttpResponse, Error> {
    let enabled = req
        .app_data::<web::Data<MetricsConfig>>()
        .is_none_or(|config| config.enabled);
    let metrics = req.app_data::<web::Data<AppMetrics>>();

    let Some(metrics) = metrics.filter(|_| enabled) else {
        return Ok(HttpResponse::ServiceUnavailable()
            .content_type("text/plain")
            .body("Metrics collection is disabled"));
    };

    metrics.update_uptime();
    let output = metrics.render().map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to render metrics: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(output))
}
