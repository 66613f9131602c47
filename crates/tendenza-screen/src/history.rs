//! Per-company histories returned for qualifying companies.

use serde::{Deserialize, Serialize};
use tendenza_criteria::{DerivedMargins, MarginType};
use tendenza_traits::{AnnualStatement, Company, CompanyCode, FiscalYear};

/// Round a percentage to two decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One year of reported EPS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyEps {
    /// Fiscal year.
    pub year: FiscalYear,
    /// Reported earnings per share.
    pub eps: f64,
}

/// EPS history of a company that passed the EPS-only screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEpsHistory {
    /// Company code.
    pub company_code: CompanyCode,
    /// Company display name.
    pub company_name: String,
    /// Reported EPS, ascending by year.
    pub yearly_eps: Vec<YearlyEps>,
}

impl CompanyEpsHistory {
    /// Build from the reported-EPS window used for qualification.
    ///
    /// Statements without EPS are skipped.
    #[must_use]
    pub fn new(company: &Company, window: &[&AnnualStatement]) -> Self {
        let yearly_eps = window
            .iter()
            .filter_map(|s| s.eps.map(|eps| YearlyEps { year: s.year, eps }))
            .collect();

        Self {
            company_code: company.code.clone(),
            company_name: company.name.clone(),
            yearly_eps,
        }
    }
}

/// One year of figures in a financial history.
///
/// Margins are percentages rounded to two decimal places; an undefined
/// margin stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyFinancial {
    /// Fiscal year.
    pub year: FiscalYear,
    /// Reported earnings per share.
    pub eps: Option<f64>,
    /// Operating margin, percent.
    pub operating_margin: Option<f64>,
    /// Gross margin, percent.
    pub gross_margin: Option<f64>,
    /// Net profit margin, percent.
    pub net_profit_margin: Option<f64>,
}

impl From<&AnnualStatement> for YearlyFinancial {
    fn from(statement: &AnnualStatement) -> Self {
        let margins = DerivedMargins::from_statement(statement);
        Self {
            year: statement.year,
            eps: statement.eps,
            operating_margin: margins.operating.map(round2),
            gross_margin: margins.gross.map(round2),
            net_profit_margin: margins.net.map(round2),
        }
    }
}

/// Financial history of a company that passed the growth screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFinancialHistory {
    /// Company code.
    pub company_code: CompanyCode,
    /// Company display name.
    pub company_name: String,
    /// Yearly figures, most recent year first.
    pub yearly_financials: Vec<YearlyFinancial>,
}

impl CompanyFinancialHistory {
    /// Build from the shared window used for qualification, ascending.
    ///
    /// With a margin floor, rows below it are dropped. A qualifying company
    /// has none, so this only guards against inconsistent windows.
    #[must_use]
    pub fn new(company: &Company, window: &[AnnualStatement], min_operating_margin: Option<f64>) -> Self {
        let yearly_financials = window
            .iter()
            .rev()
            .filter(|s| {
                min_operating_margin.is_none_or(|floor| {
                    MarginType::Operating
                        .compute(s)
                        .is_some_and(|margin| margin >= floor)
                })
            })
            .map(YearlyFinancial::from)
            .collect();

        Self {
            company_code: company.code.clone(),
            company_name: company.name.clone(),
            yearly_financials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn statement(year: i32, costs: f64, expenses: f64) -> AnnualStatement {
        AnnualStatement::new("A", year)
            .with_eps(f64::from(year - 2020))
            .with_revenue(300.0)
            .with_operating_costs(costs)
            .with_operating_expenses(expenses)
            .with_net_income(100.0)
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(33.333_333), 33.33);
        assert_relative_eq!(round2(66.666_666), 66.67);
        assert_relative_eq!(round2(-12.345_6), -12.35);
    }

    #[test]
    fn test_eps_history_is_ascending() {
        let company = Company::new("A", "Alpha");
        let statements = [
            AnnualStatement::new("A", 2023).with_eps(1.0),
            AnnualStatement::new("A", 2024).with_eps(2.0),
        ];
        let window: Vec<&AnnualStatement> = statements.iter().collect();

        let history = CompanyEpsHistory::new(&company, &window);
        assert_eq!(history.company_name, "Alpha");
        let years: Vec<i32> = history.yearly_eps.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2023, 2024]);
    }

    #[test]
    fn test_financial_history_is_descending_and_rounded() {
        let company = Company::new("A", "Alpha");
        let window = [statement(2023, 200.0, 50.0), statement(2024, 100.0, 50.0)];

        let history = CompanyFinancialHistory::new(&company, &window, None);
        let rows = &history.yearly_financials;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2024);
        assert_eq!(rows[1].year, 2023);

        // (300 - 200) / 300 = 33.333...%
        assert_relative_eq!(rows[1].gross_margin.unwrap(), 33.33);
        assert_relative_eq!(rows[1].operating_margin.unwrap(), 16.67);
        assert_relative_eq!(rows[0].net_profit_margin.unwrap(), 33.33);
        assert_eq!(rows[0].eps, Some(4.0));
    }

    #[test]
    fn test_financial_history_floor_guard() {
        let company = Company::new("A", "Alpha");
        // Operating margins 16.67% and 50%.
        let window = [statement(2023, 200.0, 50.0), statement(2024, 100.0, 50.0)];

        let history = CompanyFinancialHistory::new(&company, &window, Some(20.0));
        let years: Vec<i32> = history.yearly_financials.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2024]);
    }

    #[test]
    fn test_undefined_margins_stay_none() {
        let row = YearlyFinancial::from(&AnnualStatement::new("A", 2024).with_eps(1.0));
        assert_eq!(row.eps, Some(1.0));
        assert!(row.gross_margin.is_none());
        assert!(row.operating_margin.is_none());
        assert!(row.net_profit_margin.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let row = YearlyFinancial::from(&statement(2024, 100.0, 50.0));
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("operatingMargin").is_some());
        assert!(json.get("netProfitMargin").is_some());
    }
}
