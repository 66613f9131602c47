//! Metric listing command implementation.

use super::{OutputFormat, print_banner, print_json};
use anyhow::Result;
use tendenza_criteria::registry::{
    MetricInfo, available_categories, get_metric_info, metrics_by_category,
};

/// Metrics grouped by category.
///
/// A `filter` naming a metric (or one of its aliases) selects that metric
/// alone; otherwise it keeps categories whose debug name contains it
/// (case-insensitive).
fn grouped(filter: Option<&str>) -> Vec<(String, Vec<MetricInfo>)> {
    if let Some(info) = filter.and_then(get_metric_info) {
        return vec![(format!("{:?}", info.category), vec![info])];
    }

    available_categories()
        .into_iter()
        .map(|category| (format!("{category:?}"), metrics_by_category(&category)))
        .filter(|(name, metrics)| {
            !metrics.is_empty()
                && filter.is_none_or(|f| name.to_lowercase().contains(&f.to_lowercase()))
        })
        .collect()
}

/// List screenable metrics, optionally filtered by category.
pub(crate) fn list_metrics(category: Option<&str>, verbose: bool, format: OutputFormat) -> Result<()> {
    let groups = grouped(category);

    if format == OutputFormat::Json {
        let metrics: Vec<&MetricInfo> = groups.iter().flat_map(|(_, m)| m).collect();
        return print_json(&metrics);
    }

    print_banner("Available Metrics");

    for (name, metrics) in &groups {
        println!("{name}:");
        println!("{}", "-".repeat(60));

        for info in metrics {
            if verbose {
                println!("  {:20} - {}", info.name(), info.description);
                println!("  {:20}   inputs: {}", "", info.inputs.join(", "));
            } else {
                println!("  {}", info.name());
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed metric descriptions.\n");
    }

    println!("Metric aliases:");
    for (_, metrics) in &groups {
        for info in metrics {
            if !info.aliases.is_empty() {
                println!("  {:24} -> {}", info.aliases.join(", "), info.name());
            }
        }
    }
    println!();

    Ok(())
}
