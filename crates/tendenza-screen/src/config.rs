//! Screening engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the screening engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Page size used when a request does not name one (default: 10)
    pub default_page_size: usize,
    /// Lookback of the EPS-only screen when a request does not name one (default: 5)
    pub default_eps_years: usize,
    /// Largest page size served; larger requests are capped (default: 100)
    pub max_page_size: usize,
    /// Timeout for each loader call in milliseconds (default: none)
    pub loader_timeout_ms: Option<u64>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            default_eps_years: 5,
            max_page_size: 100,
            loader_timeout_ms: None,
        }
    }
}

impl ScreenConfig {
    /// Set the loader timeout.
    #[must_use]
    pub fn with_loader_timeout(mut self, timeout: Duration) -> Self {
        self.loader_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The loader timeout, if one is configured.
    #[must_use]
    pub fn loader_timeout(&self) -> Option<Duration> {
        self.loader_timeout_ms.map(Duration::from_millis)
    }

    /// Clamp a requested page size into `1..=max_page_size`.
    #[must_use]
    pub fn clamp_page_size(&self, page_size: usize) -> usize {
        page_size.clamp(1, self.max_page_size.max(1))
    }
}
