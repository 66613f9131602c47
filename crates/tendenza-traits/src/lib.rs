#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tendenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the tendenza growth screener.
//!
//! This crate provides the foundational abstractions shared by the criteria,
//! the screening engine and the statement loaders.

/// The version of the tendenza-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod criterion;
pub mod error;
pub mod frame;
pub mod loader;
pub mod page;
pub mod types;

// Re-exports
pub use criterion::Criterion;
pub use error::{Result, TendenzaError};
pub use frame::StatementFrame;
pub use loader::StatementLoader;
pub use page::{PageRequest, PaginatedResult};
pub use types::{AnnualStatement, Company, CompanyCode, FiscalYear};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
