//! Utility functions and helper modules.

pub mod http;
pub mod route;

pub use http::*;
pub use route::*;
