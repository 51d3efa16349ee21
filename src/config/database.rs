//! MongoDB connection configuration.

use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "edge_ai_platform";

/// Configuration for the document database
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        let database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        Self { uri, database }
    }
}
