//! Criteria implementations for the tendenza screener.
//!
//! This crate provides the building blocks of a screening query:
//! - Margins: gross, operating and net-profit margins derived from a statement
//! - Growth: "N consecutive years strictly increasing" checks per metric
//! - Floor: a minimum operating margin held across a window of years
//!
//! Every check implements [`tendenza_traits::Criterion`].
//!
//! # Example
//!
//! ```
//! use tendenza_criteria::{Metric, MetricGrowth};
//! use tendenza_traits::{AnnualStatement, Criterion};
//!
//! let window: Vec<_> = [(2022, 1.0), (2023, 1.2), (2024, 1.6)]
//!     .into_iter()
//!     .map(|(year, eps)| AnnualStatement::new("A", year).with_eps(eps))
//!     .collect();
//!
//! let criterion = MetricGrowth::new(Metric::Eps, 3);
//! assert!(criterion.evaluate(&window));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod floor;
pub mod growth;
pub mod margins;
pub mod metric;
pub mod registry;

// Re-export key types
pub use floor::OperatingMarginFloor;
pub use growth::{ConsecutiveEpsGrowth, MetricGrowth, is_strictly_increasing, trailing};
pub use margins::{DerivedMargins, MarginType};
pub use metric::Metric;
pub use registry::{MetricCategory, MetricInfo};
