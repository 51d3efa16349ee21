mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use async_trait::async_trait;
use common::{app_with, read_json, seeded_state};
use edge_ai_api::{
    AppSettings, AppState, InMemoryProjectStore, MetricsConfig, StoreError, User, UserStore,
};

/// User store whose backend is unreachable
struct UnreachableUserStore;

#[async_trait]
impl UserStore for UnreachableUserStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Err(unreachable_error())
    }

    async fn insert(&self, _user: User) -> Result<(), StoreError> {
        Err(unreachable_error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_error())
    }
}

fn unreachable_error() -> StoreError {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    StoreError::Database(mongodb::error::Error::from(io))
}

fn unreachable_state() -> AppState {
    AppState::new(
        Arc::new(UnreachableUserStore),
        Arc::new(InMemoryProjectStore::new()),
        &AppSettings::default().jwt,
    )
}

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_health_reports_database_outage() {
    let app = test::init_service(app_with(unreachable_state(), AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = read_json(resp).await;
    assert_eq!(json["status"], "unhealthy");
}

#[actix_web::test]
async fn test_login_hides_database_errors() {
    let app = test::init_service(app_with(unreachable_state(), AppSettings::default())).await;

    let resp = test::call_service(
        &app,
        common::login_request("alice", "secret").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = read_json(resp).await;
    assert_eq!(json["detail"], "Internal server error");
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string());
    assert!(json["build_time"].is_string());
}

#[actix_web::test]
async fn test_metrics_record_routes_by_pattern() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("http_requests_total"));
    assert!(text.contains(r#"route="/api/health""#));
    assert!(text.contains("app_uptime_seconds"));
}

#[actix_web::test]
async fn test_metrics_can_be_disabled() {
    let settings = AppSettings {
        metrics: MetricsConfig { enabled: false },
        ..AppSettings::default()
    };
    let app = test::init_service(app_with(seeded_state().await, settings)).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_security_headers_and_request_id() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    assert_eq!(headers.get("cache-control").unwrap(), "no-store");
    assert!(headers.get("content-security-policy").is_some());
    assert!(headers.get("strict-transport-security").is_some());

    let generated = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[actix_web::test]
async fn test_incoming_request_id_is_echoed() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/api/version")
        .insert_header(("X-Request-ID", "trace-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-123");
}

#[actix_web::test]
async fn test_openapi_spec_lists_prefixed_routes() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    let paths = json["paths"].as_object().expect("spec should list paths");
    assert!(paths.contains_key("/api/login"));
    assert!(paths.contains_key("/api/projects"));
    assert!(paths.contains_key("/api/health"));
}

#[actix_web::test]
async fn test_openapi_spec_declares_bearer_security() {
    let app = test::init_service(app_with(seeded_state().await, AppSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let json = read_json(test::call_service(&app, req).await).await;

    let definitions = json["securityDefinitions"]
        .as_object()
        .expect("spec should declare security definitions");
    let scheme = definitions.values().next().expect("one bearer scheme");
    assert_eq!(scheme["type"], "apiKey");
    assert_eq!(scheme["in"], "header");
    assert_eq!(scheme["name"], "Authorization");

    for (path, method) in [
        ("/api/projects", "get"),
        ("/api/projects", "post"),
        ("/api/projects/{project_id}", "get"),
    ] {
        let security = json["paths"][path][method]["security"]
            .as_array()
            .unwrap_or_else(|| panic!("{method} {path} should require a token"));
        assert!(!security.is_empty());
    }
    assert!(json["paths"]["/api/login"]["post"]["security"].is_null());
}
