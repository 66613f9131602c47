//! Statement loader backed by the FMP API.

use crate::{client::FmpClient, types::Period};
use async_trait::async_trait;
use tendenza_traits::{
    AnnualStatement, Company, CompanyCode, Result, StatementLoader, TendenzaError,
};
use tracing::{debug, warn};

/// Number of annual statements fetched per symbol by default.
pub const DEFAULT_HISTORY_YEARS: u32 = 10;

/// Loads annual income statements for a fixed universe of symbols.
///
/// A symbol that fails to load is skipped with a warning; the load fails
/// only if every symbol does.
#[derive(Debug, Clone)]
pub struct FmpStatementLoader {
    client: FmpClient,
    symbols: Vec<String>,
    history_years: u32,
}

impl FmpStatementLoader {
    /// Create a loader for `symbols`.
    #[must_use]
    pub fn new(client: FmpClient, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| {
                let s: String = s.into();
                s.trim().to_uppercase()
            })
            .filter(|s| !s.is_empty())
            .collect();
        symbols.sort();
        symbols.dedup();

        Self {
            client,
            symbols,
            history_years: DEFAULT_HISTORY_YEARS,
        }
    }

    /// Set how many annual statements to fetch per symbol.
    #[must_use]
    pub const fn with_history_years(mut self, years: u32) -> Self {
        self.history_years = years;
        self
    }

    /// The symbol universe, upper-cased and deduplicated.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

#[async_trait]
impl StatementLoader for FmpStatementLoader {
    async fn fetch_all_annual_statements(&self) -> Result<Vec<AnnualStatement>> {
        let mut statements = Vec::new();
        let mut failures = 0usize;

        for symbol in &self.symbols {
            match self
                .client
                .income_statement(symbol, Period::Annual, Some(self.history_years))
                .await
            {
                Ok(incomes) => {
                    let before = statements.len();
                    statements.extend(incomes.iter().filter_map(|i| i.to_annual_statement()));
                    debug!(symbol = %symbol, statements = statements.len() - before, "fetched income statements");
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "failed to fetch income statements");
                    failures += 1;
                }
            }
        }

        if failures > 0 && failures == self.symbols.len() {
            return Err(TendenzaError::DataFetch(format!(
                "failed to fetch income statements for all {failures} symbols"
            )));
        }
        Ok(statements)
    }

    async fn fetch_companies_by_codes(&self, codes: &[CompanyCode]) -> Result<Vec<Company>> {
        let symbols: Vec<&str> = codes.iter().map(String::as_str).collect();
        let quotes = self.client.quotes(&symbols).await?;
        Ok(quotes
            .into_iter()
            .map(Company::from)
            .filter(|company| codes.contains(&company.code))
            .collect())
    }

    fn name(&self) -> &str {
        "fmp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_normalized() {
        let loader = FmpStatementLoader::new(FmpClient::new("test_key"), ["msft", " AAPL ", "MSFT", ""]);
        assert_eq!(loader.symbols(), ["AAPL".to_string(), "MSFT".to_string()]);
        assert_eq!(loader.name(), "fmp");
    }

    #[tokio::test]
    async fn test_empty_universe() {
        let loader = FmpStatementLoader::new(FmpClient::new("test_key"), Vec::<String>::new())
            .with_history_years(5);
        assert!(loader.fetch_all_annual_statements().await.unwrap().is_empty());
        assert!(loader.fetch_companies_by_codes(&[]).await.unwrap().is_empty());
    }
}
