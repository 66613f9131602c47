//! Minimum operating margin held across a window.

use crate::margins::operating_margin;
use serde::{Deserialize, Serialize};
use tendenza_traits::{AnnualStatement, Criterion};

/// Configuration for the operating margin floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingMarginFloorConfig {
    /// Minimum operating margin, in percent.
    pub min_margin: f64,
    /// Years the floor must hold for, if the query names them.
    pub years: Option<usize>,
}

/// Every year in the window must have an operating margin at or above the
/// floor.
///
/// The floor applies to the whole window it is handed, not to a trailing
/// slice of its own: the engine passes the shared window of the query. A
/// year with an undefined operating margin does not meet the floor. An empty
/// window fails, as does a window shorter than `years` when set.
#[derive(Debug, Clone)]
pub struct OperatingMarginFloor {
    config: OperatingMarginFloorConfig,
}

impl OperatingMarginFloor {
    /// Create a floor of `min_margin` percent.
    #[must_use]
    pub const fn new(min_margin: f64) -> Self {
        Self {
            config: OperatingMarginFloorConfig {
                min_margin,
                years: None,
            },
        }
    }

    /// Require the floor to hold for at least `years` years.
    #[must_use]
    pub const fn with_years(mut self, years: usize) -> Self {
        self.config.years = Some(years);
        self
    }

    /// Get the floor, in percent.
    #[must_use]
    pub const fn min_margin(&self) -> f64 {
        self.config.min_margin
    }

    /// Whether a single statement meets the floor.
    #[must_use]
    pub fn passes(&self, statement: &AnnualStatement) -> bool {
        operating_margin(statement).is_some_and(|m| m >= self.config.min_margin)
    }
}

impl Criterion for OperatingMarginFloor {
    fn name(&self) -> &str {
        "min_operating_margin"
    }

    fn lookback(&self) -> usize {
        self.config.years.unwrap_or(1)
    }

    fn evaluate(&self, window: &[AnnualStatement]) -> bool {
        if window.is_empty() || window.len() < self.config.years.unwrap_or(0) {
            return false;
        }
        window.iter().all(|s| self.passes(s))
    }
}
