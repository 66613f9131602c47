//! Criterion trait for screening companies.
//!
//! A criterion is a single pass/fail check applied to one company's most
//! recent annual statements. The screening engine builds one criterion per
//! requested metric and a company qualifies only when every criterion passes.

use crate::AnnualStatement;

/// A pass/fail check over a company's statement window.
///
/// The window handed to [`Criterion::evaluate`] belongs to a single company,
/// is sorted ascending by fiscal year and ends at the most recent year
/// available. It may be longer than [`Criterion::lookback`]; implementations
/// take their own trailing slice of it.
///
/// Implementations should be thread-safe (`Send + Sync`) so independent
/// requests can screen in parallel.
///
/// # Example
///
/// ```
/// use tendenza_traits::{AnnualStatement, Criterion};
///
/// struct HasRecentEps;
///
/// impl Criterion for HasRecentEps {
///     fn name(&self) -> &str {
///         "has_recent_eps"
///     }
///
///     fn lookback(&self) -> usize {
///         1
///     }
///
///     fn evaluate(&self, window: &[AnnualStatement]) -> bool {
///         window.last().is_some_and(|s| s.eps.is_some())
///     }
/// }
///
/// let window = vec![AnnualStatement::new("X", 2024).with_eps(1.0)];
/// assert!(HasRecentEps.evaluate(&window));
/// ```
pub trait Criterion: Send + Sync {
    /// Returns the name of this criterion.
    ///
    /// Used for identification in logging.
    fn name(&self) -> &str;

    /// Returns the number of fiscal years this criterion needs.
    ///
    /// The engine sizes the shared window to the largest lookback of all
    /// criteria in a query.
    fn lookback(&self) -> usize;

    /// Returns whether the company's window satisfies this criterion.
    ///
    /// Insufficient history is a failed check, not an error.
    fn evaluate(&self, window: &[AnnualStatement]) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinYears {
        years: usize,
    }

    impl Criterion for MinYears {
        fn name(&self) -> &str {
            "min_years"
        }

        fn lookback(&self) -> usize {
            self.years
        }

        fn evaluate(&self, window: &[AnnualStatement]) -> bool {
            window.len() >= self.years
        }
    }

    #[test]
    fn test_criterion_name_and_lookback() {
        let criterion = MinYears { years: 3 };
        assert_eq!(criterion.name(), "min_years");
        assert_eq!(criterion.lookback(), 3);
    }

    #[test]
    fn test_criterion_evaluate() {
        let criterion = MinYears { years: 2 };
        let window = vec![
            AnnualStatement::new("A", 2023),
            AnnualStatement::new("A", 2024),
        ];
        assert!(criterion.evaluate(&window));
        assert!(!criterion.evaluate(&window[1..]));
    }

    #[test]
    fn test_criterion_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn Criterion>>();
    }
}
