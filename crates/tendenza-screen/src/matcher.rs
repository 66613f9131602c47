//! Company matchers.
//!
//! A matcher decides whether one company's statement history qualifies. The
//! multi-metric [`GrowthMatcher`] folds a list of criteria with short-circuit
//! AND over a shared window; [`EpsMatcher`] is the lightweight EPS-only path.

use crate::query::GrowthQuery;
use tendenza_criteria::{ConsecutiveEpsGrowth, MetricGrowth, OperatingMarginFloor};
use tendenza_traits::{AnnualStatement, Criterion};
use tracing::trace;

/// Matcher for a [`GrowthQuery`].
///
/// The floor, when set, is checked first and sees the whole shared window.
/// Each growth criterion then takes its own trailing slice of that window.
pub struct GrowthMatcher {
    window_len: usize,
    criteria: Vec<Box<dyn Criterion>>,
}

impl GrowthMatcher {
    /// Build the criteria a query asks for.
    #[must_use]
    pub fn from_query(query: &GrowthQuery) -> Self {
        let mut criteria: Vec<Box<dyn Criterion>> = Vec::new();

        if let Some(min_margin) = query.min_operating_margin {
            let floor = OperatingMarginFloor::new(min_margin);
            let floor = match query.floor_years() {
                Some(years) => floor.with_years(years),
                None => floor,
            };
            criteria.push(Box::new(floor));
        }

        for (metric, years) in query.requested_metrics() {
            criteria.push(Box::new(MetricGrowth::new(metric, years)));
        }

        Self {
            window_len: query.window_len(),
            criteria,
        }
    }

    /// Length of the shared window.
    #[must_use]
    pub const fn window_len(&self) -> usize {
        self.window_len
    }

    /// Whether the matcher has no criteria and so never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Names of the criteria, in evaluation order.
    pub fn criteria(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|c| c.name())
    }

    /// The most recent `window_len` statements of an ascending history.
    ///
    /// Shorter histories are returned whole; the criteria decide whether
    /// that is enough.
    #[must_use]
    pub fn shared_window<'a>(&self, history: &'a [AnnualStatement]) -> &'a [AnnualStatement] {
        let start = history.len().saturating_sub(self.window_len);
        &history[start..]
    }

    /// Whether a company's history, ascending by year, qualifies.
    #[must_use]
    pub fn matches(&self, history: &[AnnualStatement]) -> bool {
        if self.is_empty() {
            return false;
        }

        let window = self.shared_window(history);
        self.criteria.iter().all(|criterion| {
            let passed = criterion.evaluate(window);
            if !passed {
                trace!(
                    company = history.first().map_or("", |s| s.company_code.as_str()),
                    criterion = criterion.name(),
                    "criterion failed"
                );
            }
            passed
        })
    }
}

impl std::fmt::Debug for GrowthMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowthMatcher")
            .field("window_len", &self.window_len)
            .field("criteria", &self.criteria().collect::<Vec<_>>())
            .finish()
    }
}

/// Matcher for the EPS-only screen.
#[derive(Debug, Clone)]
pub struct EpsMatcher {
    criterion: ConsecutiveEpsGrowth,
}

impl EpsMatcher {
    /// Require `years` consecutive increases of reported EPS.
    #[must_use]
    pub const fn new(years: usize) -> Self {
        Self {
            criterion: ConsecutiveEpsGrowth::new(years),
        }
    }

    /// Whether a company's history, ascending by year, qualifies.
    #[must_use]
    pub fn matches(&self, history: &[AnnualStatement]) -> bool {
        self.criterion.evaluate(history)
    }

    /// The reported-EPS statements used for qualification.
    #[must_use]
    pub fn window<'a>(&self, history: &'a [AnnualStatement]) -> Option<Vec<&'a AnnualStatement>> {
        self.criterion.window(history)
    }
}
