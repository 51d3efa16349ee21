//! Security headers middleware implementation.

use crate::config::SecurityHeadersConfig;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderMap, HeaderName, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
};

/// Security headers middleware factory
pub struct SecurityHeaders {
    config: Rc<SecurityHeadersConfig>,
}

impl SecurityHeaders {
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    config: Rc<SecurityHeadersConfig>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let config = Rc::clone(&self.config);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_headers(res.headers_mut(), &config);
            Ok(res)
        })
    }
}

fn apply_headers(headers: &mut HeaderMap, config: &SecurityHeadersConfig) {
    if config.nosniff {
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
    }

    insert_str(headers, header::X_FRAME_OPTIONS, &config.frame_options);
    insert_str(headers, header::REFERRER_POLICY, &config.referrer_policy);

    if let Some(csp) = &config.csp {
        insert_str(headers, header::CONTENT_SECURITY_POLICY, csp);
    }

    if let Some(max_age) = config.hsts_max_age {
        insert_str(
            headers,
            header::STRICT_TRANSPORT_SECURITY,
            &format!("max-age={max_age}"),
        );
    }

    // Token responses must never be cached by intermediaries.
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
}

fn insert_str(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_headers_are_omitted() {
        let config = SecurityHeadersConfig {
            csp: None,
            hsts_max_age: None,
            nosniff: false,
            ..SecurityHeadersConfig::default()
        };
        let mut headers = HeaderMap::new();
        apply_headers(&mut headers, &config);

        assert!(headers.get(header::CONTENT_SECURITY_POLICY).is_none());
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
        assert!(headers.get(header::X_CONTENT_TYPE_OPTIONS).is_none());
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }

    #[test]
    fn test_existing_cache_control_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=60"));
        apply_headers(&mut headers, &SecurityHeadersConfig::default());

        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "max-age=60");
        assert_eq!(
            headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
            "max-age=31536000"
        );
    }
}
