//! Data types for FMP API responses.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tendenza_traits::{AnnualStatement, Company, FiscalYear};

/// Reporting period for financial statements.
///
/// Only annual reports are screened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
        }
    }
}

/// Income statement data from FMP.
///
/// Figures the API leaves out or sends as `null` are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Fiscal year, e.g. `"2024"`.
    #[serde(default)]
    pub fiscal_year: Option<String>,
    /// Reporting period (FY, Q1..Q4).
    #[serde(default)]
    pub period: Option<String>,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Cost of revenue (COGS).
    #[serde(default)]
    pub cost_of_revenue: Option<f64>,
    /// Operating expenses.
    #[serde(default)]
    pub operating_expenses: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Earnings per share (basic).
    #[serde(default)]
    pub eps: Option<f64>,
}

impl IncomeStatement {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The fiscal year, falling back to the year of the period end date.
    #[must_use]
    pub fn year(&self) -> Option<FiscalYear> {
        self.fiscal_year
            .as_deref()
            .and_then(|y| y.trim().parse().ok())
            .or_else(|| self.parsed_date().map(|d| d.year()))
    }

    /// Convert into an annual statement, or `None` without a usable year.
    ///
    /// Cost of revenue maps to operating costs.
    #[must_use]
    pub fn to_annual_statement(&self) -> Option<AnnualStatement> {
        Some(AnnualStatement {
            company_code: self.symbol.to_uppercase(),
            year: self.year()?,
            eps: self.eps,
            revenue: self.revenue,
            operating_costs: self.cost_of_revenue,
            operating_expenses: self.operating_expenses,
            net_income: self.net_income,
        })
    }
}

/// Real-time quote from FMP, used here for the company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Exchange.
    #[serde(default)]
    pub exchange: Option<String>,
}

impl From<Quote> for Company {
    fn from(quote: Quote) -> Self {
        let name = quote.name.unwrap_or_else(|| quote.symbol.clone());
        Self::new(quote.symbol, name)
    }
}
