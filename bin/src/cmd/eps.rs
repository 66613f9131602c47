//! EPS screen command implementation.

use super::{OutputFormat, fmt_opt, print_banner, print_json, print_page_footer};
use anyhow::Result;
use std::sync::Arc;
use tendenza_screen::{CompanyEpsHistory, ScreenConfig, ScreeningEngine};
use tendenza_traits::{PaginatedResult, StatementLoader};

/// Screen for companies with `years` consecutive years of rising EPS.
pub(crate) async fn run(
    loader: Arc<dyn StatementLoader>,
    config: ScreenConfig,
    years: usize,
    page: usize,
    page_size: usize,
    format: OutputFormat,
) -> Result<()> {
    let engine = ScreeningEngine::new(loader, config);
    let result = engine.screen_growing_eps(years, page, page_size).await?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_text(&result, years),
    }
    Ok(())
}

fn print_text(result: &PaginatedResult<CompanyEpsHistory>, years: usize) {
    print_banner("Growing EPS");
    println!("Rising EPS in each of the last {years} reported years\n");

    for company in &result.items {
        println!("{:<10} {}", company.company_code, company.company_name);
        let row: Vec<String> = company
            .yearly_eps
            .iter()
            .map(|y| format!("{}: {}", y.year, fmt_opt(Some(y.eps), 2)))
            .collect();
        println!("           {}", row.join("  "));
    }
    if !result.items.is_empty() {
        println!();
    }

    print_page_footer(result);
}
