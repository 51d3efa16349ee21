//! Signed access tokens (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::{config::JwtConfig, models::Claims};

/// Failures while minting a token
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("expiry falls outside the representable time range")]
    ExpiryOutOfRange,

    #[error(transparent)]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Issues and validates access tokens bound to a username
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            lifetime: Duration::try_minutes(config.expire_minutes).unwrap_or(Duration::MAX),
        }
    }

    /// Create a token whose subject is `subject`
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Decode a token, checking signature and expiry
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn issuer(secret: &str, expire_minutes: i64) -> TokenIssuer {
        TokenIssuer::new(&JwtConfig {
            secret: secret.to_string(),
            expire_minutes,
        })
    }

    #[test]
    fn test_token_carries_subject() {
        let tokens = issuer("s3cret", 30);
        let token = tokens.issue("alice").unwrap();
        let claims = tokens.validate(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let token = issuer("one", 30).issue("alice").unwrap();
        let err = issuer("two", 30).validate(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issuer("s3cret", -5).issue("alice").unwrap();
        let err = issuer("s3cret", 30).validate(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let tokens = issuer("s3cret", i64::MAX);
        assert!(matches!(
            tokens.issue("alice"),
            Err(TokenError::ExpiryOutOfRange)
        ));

        let tokens = issuer("s3cret", 100_000_000_000_000);
        assert!(matches!(
            tokens.issue("alice"),
            Err(TokenError::ExpiryOutOfRange)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(issuer("s3cret", 30).validate("not.a.jwt").is_err());
    }
}
