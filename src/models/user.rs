//! Stored user records.

use serde::{Deserialize, Serialize};

/// A user document from the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub hashed_password: String,
}
