#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tendenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # tendenza
//!
//! Sustained-growth screening for equities.
//!
//! tendenza is an umbrella crate that re-exports all tendenza sub-crates for
//! convenience.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tendenza::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let statements = vec![
//!     AnnualStatement::new("A", 2022).with_eps(1.0),
//!     AnnualStatement::new("A", 2023).with_eps(1.4),
//!     AnnualStatement::new("A", 2024).with_eps(2.1),
//! ];
//! let companies = vec![Company::new("A", "Alpha Corp")];
//!
//! let loader = MemoryLoader::new(statements, companies);
//! let engine = ScreeningEngine::new(Arc::new(loader), ScreenConfig::default());
//!
//! let page = engine.screen_growing_eps(3, 1, 10).await?;
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].yearly_eps.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Statements, pagination and the [`Criterion`] and
//!   [`StatementLoader`] traits
//! - [`criteria`] - Margin calculations and growth criteria
//! - [`screen`] - The screening engine
//! - [`fmp`] - Financial Modeling Prep statement source
//!
//! ## Architecture
//!
//! 1. A **loader** supplies every annual statement of every company
//! 2. Statements are **grouped** per company and sorted by year
//! 3. **Criteria** are folded with logical AND over each company's window
//! 4. The qualifying codes are **paginated** and the page's histories
//!    rebuilt

/// Version information for the tendenza crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types and trait definitions.
///
/// - [`AnnualStatement`] - One company's figures for one fiscal year
/// - [`Criterion`] - A check over a company's window of statements
/// - [`StatementLoader`] - Source of statements and company records
/// - [`PaginatedResult`] - One page of screening results
pub mod traits {
    pub use tendenza_traits::*;
}

pub use tendenza_traits::{
    AnnualStatement, Company, CompanyCode, Criterion, FiscalYear, PageRequest, PaginatedResult,
    Result, StatementFrame, StatementLoader, TendenzaError,
};

// ============================================================================
// Criteria
// ============================================================================

/// Margin calculations and growth criteria.
///
/// ## Margins
///
/// All margins are percentages of revenue and undefined when revenue is
/// missing or zero:
///
/// ```text
/// gross     = (revenue - operating costs) / revenue * 100
/// operating = (revenue - operating costs - operating expenses) / revenue * 100
/// net       = net income / revenue * 100
/// ```
///
/// ## Criteria
///
/// - **MetricGrowth**: one metric strictly increasing over its trailing years
/// - **ConsecutiveEpsGrowth**: reported EPS increasing, skipping unreported years
/// - **OperatingMarginFloor**: operating margin at or above a floor in every year
///
/// # Example
///
/// ```
/// use tendenza::criteria::{Metric, MetricGrowth};
/// use tendenza::{AnnualStatement, Criterion};
///
/// let history: Vec<AnnualStatement> = [(2023, 40.0), (2024, 35.0)]
///     .into_iter()
///     .map(|(year, costs)| {
///         AnnualStatement::new("A", year)
///             .with_revenue(100.0)
///             .with_operating_costs(costs)
///     })
///     .collect();
///
/// assert!(MetricGrowth::new(Metric::GrossMargin, 2).evaluate(&history));
/// ```
pub mod criteria {
    pub use tendenza_criteria::*;
}

// ============================================================================
// Screening
// ============================================================================

/// The screening engine.
///
/// [`ScreeningEngine`](screen::ScreeningEngine) drives a
/// [`StatementLoader`]; the pure functions
/// [`screen_eps`](screen::screen_eps) and
/// [`screen_financials`](screen::screen_financials) screen a snapshot
/// without one.
pub mod screen {
    pub use tendenza_screen::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
///
/// ## Example
///
/// ```ignore
/// use tendenza::fmp::{FmpClient, FmpStatementLoader};
///
/// let loader = FmpStatementLoader::new(FmpClient::from_env()?, ["AAPL", "MSFT"]);
/// ```
pub mod fmp {
    pub use tendenza_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use tendenza::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AnnualStatement, Company, Criterion, PaginatedResult, Result, StatementLoader,
        TendenzaError,
    };
    pub use tendenza_screen::{
        GrowthQuery, MemoryLoader, ScreenConfig, ScreeningEngine,
    };
}

// ============================================================================
// Tests
// ============================================================================
