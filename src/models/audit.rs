//! Audit logging data structures and types.

use actix_web::{HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::middleware::RequestId;
use crate::utils::http::{extract_client_ip, extract_user_agent};

/// Types of authentication events for audit logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    LoginSuccess,
    LoginFailure,
    TokenValidationSuccess,
    TokenValidationFailure,
    AccessDenied,
}

/// Outcomes of authentication events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    Failure,
}

impl From<&AuthEventType> for AuthEventOutcome {
    fn from(event_type: &AuthEventType) -> Self {
        match event_type {
            AuthEventType::LoginSuccess | AuthEventType::TokenValidationSuccess => Self::Success,
            _ => Self::Failure,
        }
    }
}

/// Structured audit log entry for authentication events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub username: Option<String>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
    pub reason: Option<String>,
}

impl AuthAuditEvent {
    /// Create an audit event from the request that triggered it
    pub fn from_request(event_type: AuthEventType, req: &HttpRequest) -> Self {
        Self {
            outcome: AuthEventOutcome::from(&event_type),
            event_type,
            timestamp: Utc::now(),
            ip_address: extract_client_ip(req),
            user_agent: extract_user_agent(req),
            username: None,
            method: req.method().to_string(),
            endpoint: req.path().to_string(),
            request_id: req.extensions().get::<RequestId>().map(|id| id.0.clone()),
            reason: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Emit the event on the `auth_audit` target
    pub fn log(&self) {
        info!(
            target: "auth_audit",
            event_type = ?self.event_type,
            outcome = ?self.outcome,
            timestamp = %self.timestamp,
            ip_address = %self.ip_address,
            user_agent = ?self.user_agent,
            username = ?self.username,
            method = %self.method,
            endpoint = %self.endpoint,
            request_id = ?self.request_id,
            reason = ?self.reason,
            "Authentication audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_event_carries_request_id_from_extensions() {
        let req = TestRequest::default()
            .insert_header(("user-agent", "audit-test"))
            .to_http_request();
        req.extensions_mut().insert(RequestId("req-42".to_string()));

        let event = AuthAuditEvent::from_request(AuthEventType::AccessDenied, &req)
            .with_reason("Not authenticated");

        assert_eq!(event.request_id.as_deref(), Some("req-42"));
        assert_eq!(event.reason.as_deref(), Some("Not authenticated"));
    }

    #[test]
    fn test_event_without_request_id() {
        let req = TestRequest::default().to_http_request();
        let event = AuthAuditEvent::from_request(AuthEventType::LoginFailure, &req);
        assert!(event.request_id.is_none());
    }
}
