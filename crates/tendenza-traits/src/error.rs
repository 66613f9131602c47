//! Error types for the tendenza screener.
//!
//! Screening itself has no failure states: a company that does not meet a
//! criterion simply does not qualify. The variants here cover malformed
//! queries, malformed input data and collaborator failures.

use thiserror::Error;

/// The main error type for tendenza operations.
#[derive(Debug, Error)]
pub enum TendenzaError {
    /// A screening query that cannot be evaluated.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Error due to invalid or malformed input data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from tabular input.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error fetching data from a statement loader.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// A loader call exceeded the configured timeout.
    #[error("Timed out after {0} ms waiting for {1}")]
    Timeout(u64, String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for TendenzaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TendenzaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for tendenza operations.
pub type Result<T> = std::result::Result<T, TendenzaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TendenzaError::InvalidQuery("years must be at least 1".to_string());
        assert_eq!(err.to_string(), "Invalid query: years must be at least 1");

        let err = TendenzaError::MissingColumn("company_code".to_string());
        assert_eq!(err.to_string(), "Missing required column: company_code");

        let err = TendenzaError::Timeout(1500, "annual statements".to_string());
        assert_eq!(
            err.to_string(),
            "Timed out after 1500 ms waiting for annual statements"
        );
    }

    #[test]
    fn test_error_from_str() {
        let err: TendenzaError = "boom".into();
        assert!(matches!(err, TendenzaError::Other(ref s) if s == "boom"));

        let err: TendenzaError = String::from("bang").into();
        assert!(matches!(err, TendenzaError::Other(_)));
    }
}
