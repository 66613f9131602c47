//! Pure screening over an in-memory statement snapshot.
//!
//! These functions do no I/O. The [`ScreeningEngine`](crate::ScreeningEngine)
//! calls them after loading statements and fetches company identities only
//! for the page it returns.

use crate::{
    group::{CompanyStatements, group_by_company},
    matcher::{EpsMatcher, GrowthMatcher},
    query::{EpsQuery, GrowthQuery},
};
use tendenza_traits::{AnnualStatement, CompanyCode, PageRequest, Result};
use tracing::debug;

/// Result of screening a snapshot: the grouped histories and the qualifying
/// codes, ascending by company code.
#[derive(Debug, Clone, Default)]
pub struct ScreenOutcome {
    groups: CompanyStatements,
    qualifying: Vec<CompanyCode>,
}

impl ScreenOutcome {
    fn select(groups: CompanyStatements, matches: impl Fn(&[AnnualStatement]) -> bool) -> Self {
        let qualifying: Vec<CompanyCode> = groups
            .iter()
            .filter(|(_, history)| matches(history))
            .map(|(code, _)| code.clone())
            .collect();

        debug!(
            companies = groups.len(),
            qualifying = qualifying.len(),
            "screened statement snapshot"
        );

        Self { groups, qualifying }
    }

    /// Qualifying company codes, ascending.
    #[must_use]
    pub fn qualifying(&self) -> &[CompanyCode] {
        &self.qualifying
    }

    /// Number of qualifying companies across all pages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.qualifying.len()
    }

    /// Number of companies screened.
    #[must_use]
    pub fn screened(&self) -> usize {
        self.groups.len()
    }

    /// Codes on the requested page; empty when the page is out of range.
    #[must_use]
    pub fn page_codes(&self, page: &PageRequest) -> &[CompanyCode] {
        page.slice(&self.qualifying)
    }

    /// Full statement history of a company, ascending by year.
    #[must_use]
    pub fn history(&self, code: &str) -> Option<&[AnnualStatement]> {
        self.groups.get(code).map(Vec::as_slice)
    }
}

/// Screen for companies whose reported EPS rose in each of the most recent
/// `query.years` reported years.
///
/// # Errors
///
/// Returns [`InvalidQuery`](tendenza_traits::TendenzaError::InvalidQuery)
/// if `query.years` is zero.
pub fn screen_eps(statements: &[AnnualStatement], query: &EpsQuery) -> Result<ScreenOutcome> {
    query.validate()?;
    let matcher = EpsMatcher::new(query.years);
    Ok(ScreenOutcome::select(group_by_company(statements), |history| {
        matcher.matches(history)
    }))
}

/// Screen for companies meeting every growth criterion and the margin floor
/// of `query`. An empty query qualifies no company.
///
/// # Errors
///
/// Returns [`InvalidQuery`](tendenza_traits::TendenzaError::InvalidQuery)
/// if the margin floor is not finite.
pub fn screen_financials(statements: &[AnnualStatement], query: &GrowthQuery) -> Result<ScreenOutcome> {
    query.validate()?;
    let matcher = GrowthMatcher::from_query(query);
    Ok(ScreenOutcome::select(group_by_company(statements), |history| {
        matcher.matches(history)
    }))
}
