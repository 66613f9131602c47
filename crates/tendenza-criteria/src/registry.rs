//! Metric registry for discovering and categorizing screenable metrics.
//!
//! This module provides metadata and discovery functionality for the metrics
//! a growth query can name.

use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// Metric category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    /// Per-share earnings figures
    Earnings,
    /// Margins derived from the income statement
    Profitability,
}

impl MetricCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Earnings => "Reported per-share earnings",
            Self::Profitability => "Margins derived from revenue, costs and income",
        }
    }
}

/// Metadata about a metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    /// The metric described
    pub metric: Metric,

    /// Category classification
    pub category: MetricCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Statement fields the metric reads
    pub inputs: &'static [&'static str],

    /// Alternative names `get_metric_info` resolves
    pub aliases: &'static [&'static str],
}

impl MetricInfo {
    /// Stable identifier of the metric.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.metric.name()
    }

    /// Whether `name` refers to this metric.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        Metric::from_name(name) == Some(self.metric) || self.aliases.contains(&name)
    }
}

/// Get information about all screenable metrics.
#[must_use]
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        MetricInfo {
            metric: Metric::Eps,
            category: MetricCategory::Earnings,
            description: "Earnings per share as reported",
            inputs: &["eps"],
            aliases: &["earnings_per_share"],
        },
        MetricInfo {
            metric: Metric::OperatingMargin,
            category: MetricCategory::Profitability,
            description: "(revenue - operating costs - operating expenses) / revenue",
            inputs: &["revenue", "operating_costs", "operating_expenses"],
            aliases: &["op_margin"],
        },
        MetricInfo {
            metric: Metric::GrossMargin,
            category: MetricCategory::Profitability,
            description: "(revenue - operating costs) / revenue",
            inputs: &["revenue", "operating_costs"],
            aliases: &["gross"],
        },
        MetricInfo {
            metric: Metric::NetProfitMargin,
            category: MetricCategory::Profitability,
            description: "net income / revenue",
            inputs: &["revenue", "net_income"],
            aliases: &["net_margin"],
        },
    ]
}

/// Get all metrics in a specific category.
#[must_use]
pub fn metrics_by_category(category: &MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a metric by name or alias.
#[must_use]
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics()
        .into_iter()
        .find(|info| info.matches(name))
}

/// Get all metric categories with metrics.
#[must_use]
pub fn available_categories() -> Vec<MetricCategory> {
    let mut categories: Vec<_> = available_metrics()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.sort_by_key(|c| format!("{c:?}"));
    categories.dedup();
    categories
}
