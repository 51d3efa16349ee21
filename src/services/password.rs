//! Password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::LazyLock;
use tracing::{error, warn};

use crate::models::ApiError;

/// Hash a plaintext password into an Argon2id PHC string
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::PasswordHash(e.to_string()))
}

/// Check a plaintext password against a stored hash
///
/// A stored hash that does not parse is reported as a mismatch.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    let parsed = match PasswordHash::new(hashed_password) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Throwaway hash used when the requested user does not exist
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("edge-ai-absent-user").unwrap_or_else(|e| {
        error!(error = %e, "Failed to prepare dummy password hash");
        String::new()
    })
});

/// Spend the same Argon2 work as a real check, then reject
///
/// Keeps unknown usernames from answering faster than wrong passwords.
pub fn verify_against_dummy(password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(&DUMMY_HASH) {
        let _ = Argon2::default().verify_password(password.as_bytes(), &parsed);
    }
    false
}
