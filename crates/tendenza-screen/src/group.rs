//! Grouping of statements per company.

use std::collections::BTreeMap;
use tendenza_traits::{AnnualStatement, CompanyCode};
use tracing::warn;

/// Statements keyed by company code, each list ascending by year.
///
/// The ordered map fixes the order in which qualifying companies are
/// reported: ascending by company code.
pub type CompanyStatements = BTreeMap<CompanyCode, Vec<AnnualStatement>>;

/// Group statements by company in one pass, sorting each group by year.
///
/// A company may have at most one statement per year. When the input holds
/// more, the first one in input order is kept and the rest are dropped with
/// a warning.
#[must_use]
pub fn group_by_company(statements: &[AnnualStatement]) -> CompanyStatements {
    let mut groups = CompanyStatements::new();
    for statement in statements {
        groups
            .entry(statement.company_code.clone())
            .or_default()
            .push(statement.clone());
    }

    for (code, history) in &mut groups {
        // Stable, so the first duplicate in input order survives.
        history.sort_by_key(|s| s.year);
        let before = history.len();
        history.dedup_by_key(|s| s.year);
        if history.len() < before {
            warn!(
                company = %code,
                dropped = before - history.len(),
                "duplicate annual statements for the same year"
            );
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_ordered_by_code_and_year() {
        let statements = vec![
            AnnualStatement::new("B", 2024),
            AnnualStatement::new("A", 2023),
            AnnualStatement::new("B", 2022),
            AnnualStatement::new("A", 2021),
        ];

        let groups = group_by_company(&statements);
        let codes: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["A", "B"]);

        let years: Vec<i32> = groups["B"].iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2022, 2024]);
    }

    #[test]
    fn test_duplicate_year_keeps_first() {
        let statements = vec![
            AnnualStatement::new("A", 2024).with_eps(1.0),
            AnnualStatement::new("A", 2023).with_eps(0.5),
            AnnualStatement::new("A", 2024).with_eps(9.0),
        ];

        let groups = group_by_company(&statements);
        let history = &groups["A"];
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].eps, Some(1.0));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let statements = vec![AnnualStatement::new("A", 2024), AnnualStatement::new("A", 2020)];
        let _ = group_by_company(&statements);
        assert_eq!(statements[0].year, 2024);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_company(&[]).is_empty());
    }
}
