//! Data source selection for the tendenza CLI.

use anyhow::{Result, bail};
use clap::Args;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tendenza_fmp::{FmpClient, FmpStatementLoader};
use tendenza_screen::MemoryLoader;
use tendenza_traits::StatementLoader;
use tracing::info;

/// Where statements and company names come from.
#[derive(Debug, Args)]
pub(crate) struct SourceArgs {
    /// CSV of annual statements (company_code, year, eps, revenue, ...)
    #[arg(long, global = true, env = "TENDENZA_STATEMENTS", requires = "companies")]
    pub(crate) statements: Option<PathBuf>,

    /// CSV of company names (company_code, company_name)
    #[arg(long, global = true, env = "TENDENZA_COMPANIES")]
    pub(crate) companies: Option<PathBuf>,

    /// Fetch statements from Financial Modeling Prep for these symbols
    #[arg(long, global = true, value_delimiter = ',', conflicts_with = "statements")]
    pub(crate) fmp: Vec<String>,
}

/// Build the loader selected on the command line.
pub(crate) fn build_loader(
    source: &SourceArgs,
    timeout: Option<Duration>,
) -> Result<Arc<dyn StatementLoader>> {
    if !source.fmp.is_empty() {
        let client = match timeout {
            Some(t) => FmpClient::from_env_with_timeout(t)?,
            None => FmpClient::from_env()?,
        };
        let loader = FmpStatementLoader::new(client, source.fmp.iter().map(String::as_str));
        info!(symbols = loader.symbols().len(), "using Financial Modeling Prep");
        return Ok(Arc::new(loader));
    }

    match (&source.statements, &source.companies) {
        (Some(statements), Some(companies)) => {
            let loader = MemoryLoader::from_csv(statements, companies)?;
            info!(
                statements = loader.len(),
                path = %statements.display(),
                "loaded statements from CSV"
            );
            Ok(Arc::new(loader))
        }
        _ => bail!(
            "no data source: pass --statements and --companies (or set TENDENZA_STATEMENTS \
             and TENDENZA_COMPANIES), or --fmp SYMBOLS"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_an_error() {
        let source = SourceArgs {
            statements: None,
            companies: None,
            fmp: Vec::new(),
        };
        let err = build_loader(&source, None).err().unwrap();
        assert!(err.to_string().contains("no data source"));
    }

    #[test]
    fn test_unreadable_csv_is_an_error() {
        let source = SourceArgs {
            statements: Some(PathBuf::from("/nonexistent/statements.csv")),
            companies: Some(PathBuf::from("/nonexistent/companies.csv")),
            fmp: Vec::new(),
        };
        assert!(build_loader(&source, None).is_err());
    }
}
