//! OpenAPI specification and the application factory.

use crate::{
    config::AppSettings,
    handlers::{auth_routes, project_routes, system_routes},
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders},
    models::ApiError,
    services::{AppMetrics, AppState},
};
use actix_web::{App, web::FormConfig, web::JsonConfig};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Path prefix every router is mounted under
pub const API_PREFIX: &str = "/api";

/// Route serving the generated OpenAPI document
pub const SPEC_ROUTE: &str = "/api/spec/v2";

/// Creates the OpenAPI specification skeleton for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Edge AI Platform API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Authentication and project management for the Edge AI platform.\n\n\
                ## Authentication\n\
                `POST /api/login` takes a form-encoded `username` and `password` and returns\n\
                `{\"access_token\": \"...\", \"token_type\": \"bearer\"}`.\n\
                \n\
                Protected routes expect the token in an `Authorization: Bearer <token>` header.\n\
                \n\
                ## Errors\n\
                Every error body has the shape `{\"detail\": \"...\"}`."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with all routers mounted under `/api`
///
/// Dependencies are passed in explicitly so the same factory serves
/// production (MongoDB-backed state) and tests (in-memory state).
pub fn create_app(
    state: AppState,
    metrics: AppMetrics,
    settings: AppSettings,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let form_config = FormConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());
    let json_config = JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

    App::new()
        .wrap(SecurityHeaders::new(settings.security))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(form_config)
        .app_data(json_config)
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(settings.metrics))
        .service(
            web::scope(API_PREFIX)
                .configure(auth_routes)
                .configure(project_routes)
                .configure(system_routes),
        )
        .with_json_spec_at(SPEC_ROUTE)
        .build()
}
