//! Prometheus exposure toggle.

use super::env_flag;

/// Whether `GET /api/metrics` renders the registry or answers 503
#[derive(Clone)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// `METRICS_ENABLED=false` hides the scrape endpoint; counters are still recorded
    pub fn from_env() -> Self {
        Self {
            enabled: env_flag("METRICS_ENABLED", true),
        }
    }
}
