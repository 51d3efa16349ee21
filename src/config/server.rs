//! Server bind address and first-run account bootstrap.

use std::env;

/// Top-level server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub bootstrap_user: Option<BootstrapUser>,
}

/// Account created at startup when it does not exist yet
#[derive(Clone, Debug)]
pub struct BootstrapUser {
    pub username: String,
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            bootstrap_user: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let bootstrap_user = match (env::var("BOOTSTRAP_USERNAME"), env::var("BOOTSTRAP_PASSWORD"))
        {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                Some(BootstrapUser { username, password })
            }
            _ => None,
        };

        Self {
            bind_address,
            bootstrap_user,
        }
    }
}
