//! Common types used throughout the tendenza screener.
//!
//! This module defines the input records the screener works on: one
//! [`AnnualStatement`] per company and fiscal year, and the [`Company`]
//! identity looked up for companies that qualify.

use serde::{Deserialize, Serialize};

/// A company identifier, e.g. a ticker symbol or an exchange listing code.
pub type CompanyCode = String;

/// A fiscal year.
pub type FiscalYear = i32;

/// One company's summary figures for one fiscal year.
///
/// Statements are taken from the fourth-quarter (annual) report. Every
/// numeric field is optional: a missing figure is `None`, never a sentinel
/// such as zero, so that "undefined disqualifies" holds by construction.
///
/// # Example
///
/// ```
/// use tendenza_traits::AnnualStatement;
///
/// let statement = AnnualStatement::new("2330", 2024)
///     .with_eps(45.25)
///     .with_revenue(2_894_307.0);
/// assert_eq!(statement.year, 2024);
/// assert_eq!(statement.operating_costs, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualStatement {
    /// Company the statement belongs to.
    pub company_code: CompanyCode,
    /// Fiscal year of the statement.
    pub year: FiscalYear,
    /// Earnings per share.
    pub eps: Option<f64>,
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Operating costs (cost of revenue).
    pub operating_costs: Option<f64>,
    /// Operating expenses.
    pub operating_expenses: Option<f64>,
    /// Net income after tax.
    pub net_income: Option<f64>,
}

impl AnnualStatement {
    /// Create a statement with no figures filled in.
    pub fn new(company_code: impl Into<CompanyCode>, year: FiscalYear) -> Self {
        Self {
            company_code: company_code.into(),
            year,
            eps: None,
            revenue: None,
            operating_costs: None,
            operating_expenses: None,
            net_income: None,
        }
    }

    /// Set earnings per share.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = Some(eps);
        self
    }

    /// Set revenue.
    #[must_use]
    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Set operating costs.
    #[must_use]
    pub fn with_operating_costs(mut self, operating_costs: f64) -> Self {
        self.operating_costs = Some(operating_costs);
        self
    }

    /// Set operating expenses.
    #[must_use]
    pub fn with_operating_expenses(mut self, operating_expenses: f64) -> Self {
        self.operating_expenses = Some(operating_expenses);
        self
    }

    /// Set net income.
    #[must_use]
    pub fn with_net_income(mut self, net_income: f64) -> Self {
        self.net_income = Some(net_income);
        self
    }
}

/// Identity record of a listed company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    /// Company code, the primary key.
    pub code: CompanyCode,
    /// Display name.
    pub name: String,
}

impl Company {
    /// Create a new company record.
    pub fn new(code: impl Into<CompanyCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_builder() {
        let statement = AnnualStatement::new("AAPL", 2023)
            .with_eps(6.16)
            .with_revenue(383_285.0)
            .with_operating_costs(214_137.0)
            .with_operating_expenses(54_847.0)
            .with_net_income(96_995.0);

        assert_eq!(statement.company_code, "AAPL");
        assert_eq!(statement.year, 2023);
        assert_eq!(statement.eps, Some(6.16));
        assert_eq!(statement.revenue, Some(383_285.0));
        assert_eq!(statement.operating_costs, Some(214_137.0));
        assert_eq!(statement.operating_expenses, Some(54_847.0));
        assert_eq!(statement.net_income, Some(96_995.0));
    }

    #[test]
    fn test_statement_defaults_to_missing_figures() {
        let statement = AnnualStatement::new("MSFT", 2020);
        assert!(statement.eps.is_none());
        assert!(statement.revenue.is_none());
        assert!(statement.net_income.is_none());
    }

    #[test]
    fn test_company_new() {
        let company = Company::new("2330", "TSMC");
        assert_eq!(company.code, "2330");
        assert_eq!(company.name, "TSMC");
    }
}
