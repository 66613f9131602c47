//! Statement loader trait.
//!
//! The screening engine never performs I/O itself. It asks a
//! [`StatementLoader`] for the full snapshot of annual statements and, once
//! the qualifying set is known, for the identity records of a single page of
//! companies.

use crate::{AnnualStatement, Company, CompanyCode, Result};
use async_trait::async_trait;

/// Source of annual statements and company identities.
///
/// Both calls are the only suspension points of a screening request.
/// Implementations must be safe to share across requests.
#[async_trait]
pub trait StatementLoader: Send + Sync {
    /// Fetch every annual statement of every company.
    ///
    /// No ordering is required; the engine sorts as needed.
    async fn fetch_all_annual_statements(&self) -> Result<Vec<AnnualStatement>>;

    /// Fetch identity records for exactly the given codes.
    ///
    /// Codes without a record are absent from the result, which is not an
    /// error.
    async fn fetch_companies_by_codes(&self, codes: &[CompanyCode]) -> Result<Vec<Company>>;

    /// Loader name for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLoader {
        statements: Vec<AnnualStatement>,
        companies: Vec<Company>,
    }

    #[async_trait]
    impl StatementLoader for FixedLoader {
        async fn fetch_all_annual_statements(&self) -> Result<Vec<AnnualStatement>> {
            Ok(self.statements.clone())
        }

        async fn fetch_companies_by_codes(&self, codes: &[CompanyCode]) -> Result<Vec<Company>> {
            Ok(self
                .companies
                .iter()
                .filter(|c| codes.contains(&c.code))
                .cloned()
                .collect())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_loader_object_safety() {
        let loader: Box<dyn StatementLoader> = Box::new(FixedLoader {
            statements: vec![AnnualStatement::new("A", 2024)],
            companies: vec![Company::new("A", "Alpha"), Company::new("B", "Beta")],
        });

        let statements = loader.fetch_all_annual_statements().await.unwrap();
        assert_eq!(statements.len(), 1);

        let companies = loader
            .fetch_companies_by_codes(&["B".to_string(), "Z".to_string()])
            .await
            .unwrap();
        assert_eq!(companies, vec![Company::new("B", "Beta")]);
        assert_eq!(loader.name(), "fixed");
    }
}
