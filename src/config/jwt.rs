//! Access token signing configuration.

use std::env;

use super::ConfigError;

pub const DEFAULT_EXPIRE_MINUTES: i64 = 30;

/// Longest accepted token lifetime (one year)
pub const MAX_EXPIRE_MINUTES: i64 = 60 * 24 * 365;

/// Configuration for issuing and validating access tokens
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expire_minutes: i64,
}

/// Local-only signing secret; `from_env` never falls back to it.
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expire_minutes: DEFAULT_EXPIRE_MINUTES,
        }
    }
}

impl JwtConfig {
    /// Load configuration from environment variables
    ///
    /// `JWT_SECRET` is required. `ACCESS_TOKEN_EXPIRE_MINUTES` falls back to
    /// the default when missing, unparsable or outside `1..=MAX_EXPIRE_MINUTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: parse_secret(env::var("JWT_SECRET").ok())?,
            expire_minutes: parse_expire_minutes(env::var("ACCESS_TOKEN_EXPIRE_MINUTES").ok()),
        })
    }
}

fn parse_secret(value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::Missing("JWT_SECRET"))
}

fn parse_expire_minutes(value: Option<String>) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|minutes| (1..=MAX_EXPIRE_MINUTES).contains(minutes))
        .unwrap_or(DEFAULT_EXPIRE_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_minutes_bounds() {
        assert_eq!(parse_expire_minutes(Some("45".into())), 45);
        assert_eq!(
            parse_expire_minutes(Some(MAX_EXPIRE_MINUTES.to_string())),
            MAX_EXPIRE_MINUTES
        );
        assert_eq!(
            parse_expire_minutes(Some("100000000000000".into())),
            DEFAULT_EXPIRE_MINUTES
        );
        assert_eq!(parse_expire_minutes(Some("0".into())), DEFAULT_EXPIRE_MINUTES);
        assert_eq!(parse_expire_minutes(Some("-5".into())), DEFAULT_EXPIRE_MINUTES);
        assert_eq!(parse_expire_minutes(Some("soon".into())), DEFAULT_EXPIRE_MINUTES);
        assert_eq!(parse_expire_minutes(None), DEFAULT_EXPIRE_MINUTES);
    }

    #[test]
    fn test_secret_is_required() {
        assert!(matches!(
            parse_secret(None),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
        assert!(parse_secret(Some("   ".into())).is_err());
        assert_eq!(parse_secret(Some("s3cret".into())).unwrap(), "s3cret");
    }

    #[test]
    fn test_from_env_never_yields_default_secret() {
        unsafe {
            env::remove_var("JWT_SECRET");
        }
        assert!(JwtConfig::from_env().is_err());

        unsafe {
            env::set_var("JWT_SECRET", "from-env");
            env::set_var("ACCESS_TOKEN_EXPIRE_MINUTES", "100000000000000");
        }
        let config = JwtConfig::from_env().unwrap();
        assert_eq!(config.secret, "from-env");
        assert_ne!(config.secret, JwtConfig::default().secret);
        assert_eq!(config.expire_minutes, DEFAULT_EXPIRE_MINUTES);

        unsafe {
            env::remove_var("JWT_SECRET");
            env::remove_var("ACCESS_TOKEN_EXPIRE_MINUTES");
        }
    }
}
