//! Response security header configuration.

use std::env;

use super::env_flag;

const DEFAULT_CSP: &str = "default-src 'none'; frame-ancestors 'none'";
const ONE_YEAR_SECONDS: u32 = 31_536_000;

/// Configuration for the security headers middleware
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    pub csp: Option<String>,
    pub hsts_max_age: Option<u32>,
    pub frame_options: String,
    pub nosniff: bool,
    pub referrer_policy: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp: Some(DEFAULT_CSP.to_string()),
            hsts_max_age: Some(ONE_YEAR_SECONDS),
            frame_options: "DENY".to_string(),
            nosniff: true,
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let csp = env_flag("SECURITY_CSP_ENABLED", true)
            .then(|| env::var("CSP_DIRECTIVES").unwrap_or_else(|_| DEFAULT_CSP.to_string()));

        let hsts_max_age = env_flag("HSTS_ENABLED", true).then(|| {
            env::var("HSTS_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ONE_YEAR_SECONDS)
        });

        Self {
            csp,
            hsts_max_age,
            frame_options: env::var("X_FRAME_OPTIONS").unwrap_or_else(|_| "DENY".to_string()),
            nosniff: env_flag("X_CONTENT_TYPE_OPTIONS", true),
            referrer_policy: env::var("REFERRER_POLICY")
                .unwrap_or_else(|_| "no-referrer".to_string()),
        }
    }
}
