//! Configuration structures and loading utilities.
//!
//! Every structure here has sensible defaults and a `from_env()` constructor
//! that overrides them from environment variables.

pub mod database;
pub mod jwt;
pub mod logging;
pub mod metrics;
pub mod security;
pub mod server;

pub use database::*;
pub use jwt::*;
pub use logging::*;
pub use metrics::*;
pub use security::*;
pub use server::*;

use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
}

/// Read a boolean flag; anything other than `true`/`false` keeps the default
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) if v.eq_ignore_ascii_case("true") => true,
        Ok(v) if v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

/// All configuration sections, loaded together at startup
#[derive(Clone, Default)]
pub struct AppSettings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
    pub security: SecurityHeadersConfig,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            metrics: MetricsConfig::from_env(),
            security: SecurityHeadersConfig::from_env(),
        })
    }
}
