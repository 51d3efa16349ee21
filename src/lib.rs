//! Edge AI Platform API - authentication and project management backend
//!
//! An Actix Web service backed by MongoDB that:
//! - exchanges form-encoded credentials for signed bearer tokens
//! - lets authenticated users create and browse their projects
//! - exposes health, version and Prometheus metrics endpoints
//! - publishes an OpenAPI document generated with Paperclip
//!
//! ## Architecture
//!
//! - `config/` - Environment-driven configuration
//! - `models/` - Request/response models, stored records and the error type
//! - `handlers/` - Routers and the application factory
//! - `middleware/` - Request IDs, security headers, request metrics
//! - `services/` - Stores, password hashing, tokens, metrics
//! - `utils/` - Request inspection helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use edge_ai_api::{AppMetrics, AppSettings, AppState, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let settings = AppSettings::default();
//!     let state = AppState::in_memory(&settings.jwt);
//!     let metrics = AppMetrics::new().map_err(std::io::Error::other)?;
//!     let _app = create_app(state, metrics, settings);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{
    AppSettings, ConfigError, DatabaseConfig, JwtConfig, LoggingConfig, MetricsConfig,
    SecurityHeadersConfig, ServerConfig,
};
pub use handlers::{API_PREFIX, create_app, create_openapi_spec};
pub use middleware::{MetricsMiddleware, RequestId, RequestIdMiddleware, SecurityHeaders};
pub use models::{
    ApiError, AuthAuditEvent, AuthEventOutcome, AuthEventType, Claims, CreateProjectRequest,
    ErrorBody, HealthResponse, LoginForm, Project, ProjectType, TokenResponse,
    TokenValidationRequest, TokenValidationResponse, User, VersionResponse,
};
pub use services::{
    AppMetrics, AppState, AuthService, AuthenticatedUser, InMemoryProjectStore,
    InMemoryUserStore, MongoStore, ProjectStore, StoreError, TokenError, TokenIssuer, UserStore,
    hash_password, verify_password,
};
