//! CLI subcommand modules.
//!
//! This module contains the implementations for all tendenza CLI subcommands.

pub(crate) mod eps;
pub(crate) mod financials;
pub(crate) mod metrics;

use anyhow::Result;
use clap::ValueEnum;
use tendenza_traits::PaginatedResult;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

pub(crate) fn print_banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

pub(crate) fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_page_footer<T>(page: &PaginatedResult<T>) {
    println!("{}", "─".repeat(62));
    if page.total_count == 0 {
        println!("No companies qualify.");
    } else {
        println!(
            "Page {} of {} ({} companies qualify, {} per page)",
            page.page_number, page.total_pages, page.total_count, page.page_size
        );
        if page.items.is_empty() {
            println!("This page is past the end of the results.");
        }
    }
    println!();
}

/// Format an optional figure, `-` when undefined.
pub(crate) fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(Some(12.346), 2), "12.35");
        assert_eq!(fmt_opt(Some(-1.0), 1), "-1.0");
        assert_eq!(fmt_opt(None, 2), "-");
    }
}
