//! In-memory statement loader.

use async_trait::async_trait;
use polars::prelude::DataFrame;
use std::path::Path;
use tendenza_traits::{
    AnnualStatement, Company, CompanyCode, Result, StatementFrame, StatementLoader,
    frame::{companies_from_frame, read_csv},
};
use tracing::debug;

/// A loader over a fixed snapshot held in memory.
///
/// Built directly from records, or from statement and company tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    statements: Vec<AnnualStatement>,
    companies: Vec<Company>,
}

impl MemoryLoader {
    /// Create a loader from records.
    #[must_use]
    pub const fn new(statements: Vec<AnnualStatement>, companies: Vec<Company>) -> Self {
        Self {
            statements,
            companies,
        }
    }

    /// Create a loader from a statement frame and a company table.
    ///
    /// # Errors
    ///
    /// Returns an error if either table is missing a required column or
    /// holds null keys.
    pub fn from_frames(statements: &StatementFrame, companies: &DataFrame) -> Result<Self> {
        Ok(Self::new(
            statements.to_statements()?,
            companies_from_frame(companies)?,
        ))
    }

    /// Create a loader from a statements CSV and a companies CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or does not match the
    /// expected schema.
    pub fn from_csv(statements: impl AsRef<Path>, companies: impl AsRef<Path>) -> Result<Self> {
        let frame = StatementFrame::from_csv(statements)?;
        let companies = read_csv(companies)?;
        let loader = Self::from_frames(&frame, &companies)?;
        debug!(
            statements = loader.statements.len(),
            companies = loader.companies.len(),
            "loaded statement snapshot from CSV"
        );
        Ok(loader)
    }

    /// Number of statements held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether no statements are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[async_trait]
impl StatementLoader for MemoryLoader {
    async fn fetch_all_annual_statements(&self) -> Result<Vec<AnnualStatement>> {
        Ok(self.statements.clone())
    }

    async fn fetch_companies_by_codes(&self, codes: &[CompanyCode]) -> Result<Vec<Company>> {
        Ok(self
            .companies
            .iter()
            .filter(|company| codes.contains(&company.code))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[tokio::test]
    async fn test_fetch_companies_by_codes() {
        let loader = MemoryLoader::new(
            vec![AnnualStatement::new("A", 2024)],
            vec![Company::new("A", "Alpha"), Company::new("B", "Beta")],
        );

        let found = loader
            .fetch_companies_by_codes(&["B".to_string(), "Z".to_string()])
            .await
            .unwrap();
        assert_eq!(found, vec![Company::new("B", "Beta")]);
        assert_eq!(loader.fetch_all_annual_statements().await.unwrap().len(), 1);
        assert_eq!(loader.name(), "memory");
    }

    #[tokio::test]
    async fn test_from_frames() {
        let statements = df! {
            "company_code" => &[2330i64, 2330],
            "year" => &[2023i64, 2024],
            "eps" => &[Some(32.34), Some(45.25)],
            "revenue" => &[Some(2_161_736.0), None],
        }
        .unwrap();
        let companies = df! {
            "company_code" => &["2330"],
            "company_name" => &["TSMC"],
        }
        .unwrap();

        let loader = MemoryLoader::from_frames(&StatementFrame::new(statements), &companies).unwrap();
        assert_eq!(loader.len(), 2);

        let fetched = loader.fetch_all_annual_statements().await.unwrap();
        assert_eq!(fetched[0].company_code, "2330");
        assert_eq!(fetched[1].revenue, None);

        let names = loader
            .fetch_companies_by_codes(&["2330".to_string()])
            .await
            .unwrap();
        assert_eq!(names[0].name, "TSMC");
    }

    #[test]
    fn test_from_frames_missing_column() {
        let statements = df! { "company_code" => &["A"] }.unwrap();
        let companies = df! {
            "company_code" => &["A"],
            "company_name" => &["Alpha"],
        }
        .unwrap();
        assert!(MemoryLoader::from_frames(&StatementFrame::new(statements), &companies).is_err());
    }

    #[tokio::test]
    async fn test_from_csv_keeps_code_text() {
        let dir = std::env::temp_dir().join(format!("tendenza-memory-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let statements = dir.join("statements.csv");
        let companies = dir.join("companies.csv");
        std::fs::write(&statements, "company_code,year,eps\n0050,2023,1.0\n0050,2024,2.0\n").unwrap();
        std::fs::write(&companies, "company_code,company_name\n0050,Yuanta Taiwan Top 50\n").unwrap();

        let loader = MemoryLoader::from_csv(&statements, &companies).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let fetched = loader.fetch_all_annual_statements().await.unwrap();
        assert!(fetched.iter().all(|s| s.company_code == "0050"));

        let names = loader
            .fetch_companies_by_codes(&["0050".to_string()])
            .await
            .unwrap();
        assert_eq!(names, vec![Company::new("0050", "Yuanta Taiwan Top 50")]);
    }

    #[test]
    fn test_from_csv_missing_file() {
        assert!(MemoryLoader::from_csv("/nonexistent/statements.csv", "/nonexistent/companies.csv").is_err());
    }
}
