//! Data models and schemas for the Edge AI platform API.
//!
//! This module contains the request/response models, stored documents,
//! audit types and the API error type.

pub mod api;
pub mod audit;
pub mod auth;
pub mod error;
pub mod project;
pub mod user;

pub use api::*;
pub use audit::*;
pub use auth::*;
pub use error::*;
pub use project::*;
pub use user::*;
