//! HTTP request handlers for API endpoints.
//!
//! Each router module exposes a `*_routes` function that mounts its
//! resources on a scope; [`openapi::create_app`] mounts them under `/api`.

pub mod auth;
pub mod health;
pub mod metrics;
pub mod openapi;
pub mod projects;
pub mod system;
pub mod version;

pub use auth::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use projects::*;
pub use system::*;
pub use version::*;
