//! Financial Modeling Prep (FMP) statement source for tendenza.
//!
//! This crate provides a client for fetching annual income statements from
//! the [Financial Modeling Prep](https://financialmodelingprep.com/) API and
//! a [`StatementLoader`](tendenza_traits::StatementLoader) over a universe of
//! symbols.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tendenza_fmp::{FmpClient, FmpStatementLoader};
//! use tendenza_screen::{ScreenConfig, ScreeningEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let loader = FmpStatementLoader::new(client, ["AAPL", "MSFT", "NVDA"]);
//!
//!     let engine = ScreeningEngine::new(Arc::new(loader), ScreenConfig::default());
//!     let page = engine.screen_growing_eps(5, 1, 10).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod loader;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use loader::{DEFAULT_HISTORY_YEARS, FmpStatementLoader};
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
