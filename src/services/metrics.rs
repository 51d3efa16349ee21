//! Metrics collection and Prometheus integration service.

use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Route excluded from request metrics so scrapes do not count themselves
pub const METRICS_ROUTE: &str = "/api/metrics";

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub auth_login_attempts_total: CounterVec,
    pub app_uptime_seconds: Gauge,
    pub start_time: Instant,
}

impl AppMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        let auth_login_attempts_total = CounterVec::new(
            Opts::new("auth_login_attempts_total", "Login attempts by outcome"),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(auth_login_attempts_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            auth_login_attempts_total,
            app_uptime_seconds,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == METRICS_ROUTE {
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, &status.to_string(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Count a login attempt; `outcome` is `success` or `failure`
    pub fn record_login(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.auth_login_attempts_total
            .with_label_values(&[outcome])
            .inc();
    }

    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        encoder.encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_route_is_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", METRICS_ROUTE, 200, Duration::from_millis(1));
        metrics.record_request("GET", "/api/health", 200, Duration::from_millis(1));

        let output = metrics.render().unwrap();
        assert!(output.contains(r#"route="/api/health""#));
        assert!(!output.contains(r#"route="/api/metrics""#));
    }

    #[test]
    fn test_login_outcomes_are_labelled() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_login(true);
        metrics.record_login(false);
        metrics.record_login(false);

        assert_eq!(
            metrics
                .auth_login_attempts_total
                .with_label_values(&["failure"])
                .get(),
            2.0
        );
        assert_eq!(
            metrics
                .auth_login_attempts_total
                .with_label_values(&["success"])
                .get(),
            1.0
        );
    }
}
