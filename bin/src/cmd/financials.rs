//! Financial growth screen command implementation.

use super::{OutputFormat, fmt_opt, print_banner, print_json, print_page_footer};
use anyhow::Result;
use std::sync::Arc;
use tendenza_screen::{CompanyFinancialHistory, GrowthQuery, ScreenConfig, ScreeningEngine};
use tendenza_traits::{PaginatedResult, StatementLoader};

/// Screen for companies meeting every criterion of `query`.
pub(crate) async fn run(
    loader: Arc<dyn StatementLoader>,
    config: ScreenConfig,
    query: &GrowthQuery,
    format: OutputFormat,
) -> Result<()> {
    let engine = ScreeningEngine::new(loader, config);
    let result = engine.screen_growing_financials(query).await?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_text(&result, query),
    }
    Ok(())
}

fn describe(query: &GrowthQuery) -> Vec<String> {
    let mut lines: Vec<String> = query
        .requested_metrics()
        .into_iter()
        .map(|(metric, years)| format!("{metric} rising for {years} years"))
        .collect();

    if let Some(floor) = query.min_operating_margin {
        let span = query
            .floor_years()
            .map_or_else(|| "every year screened".to_string(), |y| format!("{y} years"));
        lines.push(format!("operating_margin >= {floor}% for {span}"));
    }
    lines
}

fn print_text(result: &PaginatedResult<CompanyFinancialHistory>, query: &GrowthQuery) {
    print_banner("Growing Financials");

    let criteria = describe(query);
    if criteria.is_empty() {
        println!("No criteria given; nothing can qualify.\n");
    } else {
        println!("Criteria:");
        for line in &criteria {
            println!("  {line}");
        }
        println!();
    }

    for company in &result.items {
        println!("{} {}", company.company_code, company.company_name);
        println!(
            "  {:<6} {:>10} {:>10} {:>10} {:>10}",
            "Year", "EPS", "Op %", "Gross %", "Net %"
        );
        for row in &company.yearly_financials {
            println!(
                "  {:<6} {:>10} {:>10} {:>10} {:>10}",
                row.year,
                fmt_opt(row.eps, 2),
                fmt_opt(row.operating_margin, 2),
                fmt_opt(row.gross_margin, 2),
                fmt_opt(row.net_profit_margin, 2),
            );
        }
        println!();
    }

    print_page_footer(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let query = GrowthQuery {
            eps_years: Some(3),
            min_operating_margin: Some(10.0),
            ..GrowthQuery::default()
        };
        assert_eq!(
            describe(&query),
            vec![
                "eps rising for 3 years".to_string(),
                "operating_margin >= 10% for every year screened".to_string(),
            ]
        );
        assert!(describe(&GrowthQuery::default()).is_empty());
    }
}
