//! Consecutive-growth criteria.
//!
//! A growth check looks at a metric over the most recent *k* fiscal years,
//! in ascending year order, and passes only if every value is defined and
//! every year is strictly greater than the one before it.

use crate::metric::Metric;
use serde::{Deserialize, Serialize};
use tendenza_traits::{AnnualStatement, Criterion};

/// Whether every value is defined and each adjacent pair strictly increases.
///
/// Sequences shorter than two points have no pairs and pass vacuously;
/// callers enforce how many points a window must hold.
#[must_use]
pub fn is_strictly_increasing(values: &[Option<f64>]) -> bool {
    values.iter().all(Option::is_some)
        && values
            .windows(2)
            .all(|pair| matches!(pair, [Some(prev), Some(curr)] if curr > prev))
}

/// The trailing `k` elements of `window`, or `None` if it holds fewer.
#[must_use]
pub fn trailing<T>(window: &[T], k: usize) -> Option<&[T]> {
    window.len().checked_sub(k).map(|start| &window[start..])
}

/// Configuration for a metric growth criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricGrowthConfig {
    /// Metric to check.
    pub metric: Metric,
    /// Number of consecutive years that must increase.
    pub years: usize,
}

/// Growth of one metric over its own trailing window.
///
/// The criterion takes the trailing `years` statements of the window it is
/// given. Missing years or an undefined value anywhere in that slice fail
/// the check.
#[derive(Debug, Clone)]
pub struct MetricGrowth {
    config: MetricGrowthConfig,
}

impl MetricGrowth {
    /// Create a growth criterion for `metric` over `years` years.
    #[must_use]
    pub const fn new(metric: Metric, years: usize) -> Self {
        Self::with_config(MetricGrowthConfig { metric, years })
    }

    /// Create a growth criterion from a configuration.
    #[must_use]
    pub const fn with_config(config: MetricGrowthConfig) -> Self {
        Self { config }
    }

    /// Get the metric being checked.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.config.metric
    }
}

impl Criterion for MetricGrowth {
    fn name(&self) -> &str {
        match self.config.metric {
            Metric::Eps => "eps_growth",
            Metric::OperatingMargin => "operating_margin_growth",
            Metric::GrossMargin => "gross_margin_growth",
            Metric::NetProfitMargin => "net_profit_margin_growth",
        }
    }

    fn lookback(&self) -> usize {
        self.config.years
    }

    fn evaluate(&self, window: &[AnnualStatement]) -> bool {
        let Some(slice) = trailing(window, self.config.years) else {
            return false;
        };
        let values: Vec<Option<f64>> = slice.iter().map(|s| self.config.metric.value(s)).collect();
        is_strictly_increasing(&values)
    }
}

/// EPS growth over the most recent years that report EPS.
///
/// Unlike [`MetricGrowth`], years without a reported EPS are skipped before
/// the window is taken, so a gap in reporting does not fail the check by
/// itself. The company needs at least `years` reported values.
#[derive(Debug, Clone)]
pub struct ConsecutiveEpsGrowth {
    years: usize,
}

impl ConsecutiveEpsGrowth {
    /// Create an EPS growth criterion over `years` reported years.
    #[must_use]
    pub const fn new(years: usize) -> Self {
        Self { years }
    }

    /// The reported-EPS statements this criterion looks at, ascending.
    ///
    /// `None` if the company reports fewer than `years` EPS values.
    #[must_use]
    pub fn window<'a>(&self, statements: &'a [AnnualStatement]) -> Option<Vec<&'a AnnualStatement>> {
        let reported: Vec<&AnnualStatement> =
            statements.iter().filter(|s| s.eps.is_some()).collect();
        let start = reported.len().checked_sub(self.years)?;
        Some(reported[start..].to_vec())
    }
}

impl Criterion for ConsecutiveEpsGrowth {
    fn name(&self) -> &str {
        "consecutive_eps_growth"
    }

    fn lookback(&self) -> usize {
        self.years
    }

    fn evaluate(&self, window: &[AnnualStatement]) -> bool {
        self.window(window).is_some_and(|reported| {
            let values: Vec<Option<f64>> = reported.iter().map(|s| s.eps).collect();
            is_strictly_increasing(&values)
        })
    }
}
