//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{IncomeStatement, Period, Quote},
};
use reqwest::Client;
use std::{env, time::Duration};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: api_key.into(),
        })
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(api_key_from_env()?))
    }

    /// Like [`from_env`](Self::from_env), with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or the HTTP
    /// client cannot be built.
    pub fn from_env_with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_timeout(api_key_from_env()?, timeout)
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports some failures with a 200 and an error object
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get income statements for a symbol, most recent first.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `period` - Reporting period
    /// * `limit` - Number of periods to return
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<IncomeStatement>> {
        self.get(&income_statement_endpoint(symbol, period, limit))
            .await
    }

    /// Get real-time quotes for multiple symbols.
    ///
    /// Unknown symbols are absent from the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn quotes(&self, symbols: &[&str]) -> Result<Vec<Quote>> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let symbols_str = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        self.get(&format!("quote?symbol={symbols_str}")).await
    }

    /// Get the real-time quote for one symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        self.quotes(&[symbol])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }
}

fn api_key_from_env() -> Result<String> {
    // Try to load .env file (ignore errors if not found)
    let _ = dotenvy::dotenv();
    env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)
}

fn income_statement_endpoint(symbol: &str, period: Period, limit: Option<u32>) -> String {
    let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
    format!(
        "income-statement?symbol={}&period={}{}",
        symbol.to_uppercase(),
        period.as_str(),
        limit_param
    )
}
