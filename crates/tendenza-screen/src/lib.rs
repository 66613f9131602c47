//! Growth screening engine for tendenza.
//!
//! This crate turns a snapshot of annual statements into a paginated list of
//! companies whose metrics grew year over year. It provides:
//! - Queries: [`EpsQuery`] for the EPS-only screen, [`GrowthQuery`] for the
//!   multi-metric screen
//! - Grouping of statements per company, ordered by company code
//! - Matchers that fold criteria with logical AND over a shared window
//! - History reconstruction for the companies on the requested page
//! - [`ScreeningEngine`], the async service that drives a [`StatementLoader`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tendenza_screen::{GrowthQuery, MemoryLoader, ScreenConfig, ScreeningEngine};
//!
//! # async fn run() -> tendenza_traits::Result<()> {
//! let loader = MemoryLoader::from_csv("statements.csv", "companies.csv")?;
//! let engine = ScreeningEngine::new(Arc::new(loader), ScreenConfig::default());
//!
//! let query = GrowthQuery {
//!     eps_years: Some(3),
//!     gross_margin_years: Some(2),
//!     ..GrowthQuery::default()
//! };
//! let page = engine.screen_growing_financials(&query).await?;
//! println!("{} companies qualify", page.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! [`StatementLoader`]: tendenza_traits::StatementLoader

mod config;
mod engine;
mod group;
mod history;
mod matcher;
mod memory;
mod query;
mod screen;

// Re-export main types
pub use config::ScreenConfig;
pub use engine::ScreeningEngine;
pub use group::{CompanyStatements, group_by_company};
pub use history::{CompanyEpsHistory, CompanyFinancialHistory, YearlyEps, YearlyFinancial};
pub use matcher::{EpsMatcher, GrowthMatcher};
pub use memory::MemoryLoader;
pub use query::{EpsQuery, GrowthQuery};
pub use screen::{ScreenOutcome, screen_eps, screen_financials};
