//! Profit margins derived from an annual statement.
//!
//! Margins are percentages of revenue and are never stored. A margin is
//! undefined (`None`) when revenue is missing or zero, or when one of its
//! operands is missing. Values are unrounded here; rounding belongs to
//! presentation.

use serde::{Deserialize, Serialize};
use tendenza_traits::AnnualStatement;

/// Type of profit margin to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginType {
    /// Gross margin: (revenue - operating costs) / revenue
    Gross,
    /// Operating margin: (revenue - operating costs - operating expenses) / revenue
    Operating,
    /// Net profit margin: net income / revenue
    Net,
}

impl MarginType {
    /// Compute this margin for a statement, as a percentage.
    #[must_use]
    pub fn compute(&self, statement: &AnnualStatement) -> Option<f64> {
        match self {
            Self::Gross => gross_margin(statement),
            Self::Operating => operating_margin(statement),
            Self::Net => net_profit_margin(statement),
        }
    }
}

/// The three margins of one statement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMargins {
    /// Gross margin in percent.
    pub gross: Option<f64>,
    /// Operating margin in percent.
    pub operating: Option<f64>,
    /// Net profit margin in percent.
    pub net: Option<f64>,
}

impl DerivedMargins {
    /// Compute all three margins of a statement.
    #[must_use]
    pub fn from_statement(statement: &AnnualStatement) -> Self {
        Self {
            gross: gross_margin(statement),
            operating: operating_margin(statement),
            net: net_profit_margin(statement),
        }
    }

    /// Get a margin by type.
    #[must_use]
    pub const fn get(&self, margin_type: MarginType) -> Option<f64> {
        match margin_type {
            MarginType::Gross => self.gross,
            MarginType::Operating => self.operating,
            MarginType::Net => self.net,
        }
    }
}

impl From<&AnnualStatement> for DerivedMargins {
    fn from(statement: &AnnualStatement) -> Self {
        Self::from_statement(statement)
    }
}

/// Gross margin in percent.
#[must_use]
pub fn gross_margin(statement: &AnnualStatement) -> Option<f64> {
    let revenue = usable_revenue(statement)?;
    let costs = statement.operating_costs?;
    percent_of(revenue - costs, revenue)
}

/// Operating margin in percent.
#[must_use]
pub fn operating_margin(statement: &AnnualStatement) -> Option<f64> {
    let revenue = usable_revenue(statement)?;
    let costs = statement.operating_costs?;
    let expenses = statement.operating_expenses?;
    percent_of(revenue - costs - expenses, revenue)
}

/// Net profit margin in percent.
#[must_use]
pub fn net_profit_margin(statement: &AnnualStatement) -> Option<f64> {
    let revenue = usable_revenue(statement)?;
    let net_income = statement.net_income?;
    percent_of(net_income, revenue)
}

fn usable_revenue(statement: &AnnualStatement) -> Option<f64> {
    statement.revenue.filter(|r| r.is_finite() && *r != 0.0)
}

fn percent_of(numerator: f64, revenue: f64) -> Option<f64> {
    let margin = numerator / revenue * 100.0;
    margin.is_finite().then_some(margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn statement() -> AnnualStatement {
        AnnualStatement::new("A", 2024)
            .with_revenue(200.0)
            .with_operating_costs(120.0)
            .with_operating_expenses(40.0)
            .with_net_income(30.0)
    }

    #[test]
    fn test_margins() {
        let margins = DerivedMargins::from_statement(&statement());
        assert_relative_eq!(margins.gross.unwrap(), 40.0);
        assert_relative_eq!(margins.operating.unwrap(), 20.0);
        assert_relative_eq!(margins.net.unwrap(), 15.0);
    }

    #[test]
    fn test_zero_revenue_is_undefined() {
        let mut s = statement();
        s.revenue = Some(0.0);
        assert_eq!(DerivedMargins::from_statement(&s), DerivedMargins::default());
    }

    #[test]
    fn test_missing_revenue_is_undefined() {
        let mut s = statement();
        s.revenue = None;
        let margins = DerivedMargins::from(&s);
        assert!(margins.gross.is_none());
        assert!(margins.operating.is_none());
        assert!(margins.net.is_none());
    }

    #[test]
    fn test_missing_operand_only_affects_its_margins() {
        let mut s = statement();
        s.operating_expenses = None;
        let margins = DerivedMargins::from_statement(&s);
        assert!(margins.gross.is_some());
        assert!(margins.operating.is_none());
        assert!(margins.net.is_some());
    }

    #[test]
    fn test_negative_margins_are_defined() {
        let s = AnnualStatement::new("A", 2024)
            .with_revenue(100.0)
            .with_operating_costs(90.0)
            .with_operating_expenses(30.0)
            .with_net_income(-25.0);
        assert_relative_eq!(operating_margin(&s).unwrap(), -20.0);
        assert_relative_eq!(net_profit_margin(&s).unwrap(), -25.0);
    }

    #[test]
    fn test_margin_type_dispatch() {
        let s = statement();
        let margins = DerivedMargins::from_statement(&s);
        for margin_type in [MarginType::Gross, MarginType::Operating, MarginType::Net] {
            assert_eq!(margin_type.compute(&s), margins.get(margin_type));
        }
    }
}
