//! Screenable metrics.

use crate::margins::MarginType;
use serde::{Deserialize, Serialize};
use tendenza_traits::AnnualStatement;

/// A per-year figure that can be screened for growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Reported earnings per share.
    Eps,
    /// Operating margin, derived.
    OperatingMargin,
    /// Gross margin, derived.
    GrossMargin,
    /// Net profit margin, derived.
    NetProfitMargin,
}

impl Metric {
    /// All metrics, in query order.
    pub const ALL: [Self; 4] = [
        Self::Eps,
        Self::OperatingMargin,
        Self::GrossMargin,
        Self::NetProfitMargin,
    ];

    /// Stable identifier of the metric.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eps => "eps",
            Self::OperatingMargin => "operating_margin",
            Self::GrossMargin => "gross_margin",
            Self::NetProfitMargin => "net_profit_margin",
        }
    }

    /// The margin this metric is derived from, if any.
    #[must_use]
    pub const fn margin_type(&self) -> Option<MarginType> {
        match self {
            Self::Eps => None,
            Self::OperatingMargin => Some(MarginType::Operating),
            Self::GrossMargin => Some(MarginType::Gross),
            Self::NetProfitMargin => Some(MarginType::Net),
        }
    }

    /// The metric's value for one statement.
    #[must_use]
    pub fn value(&self, statement: &AnnualStatement) -> Option<f64> {
        match self.margin_type() {
            None => statement.eps,
            Some(margin_type) => margin_type.compute(statement),
        }
    }

    /// Look up a metric by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
