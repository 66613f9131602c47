//! tendenza CLI binary.
//!
//! Provides a command-line interface for the tendenza growth screener.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::OutputFormat;
use data::SourceArgs;
use std::{process, time::Duration};
use tendenza_screen::ScreenConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tendenza")]
#[command(about = "Screen companies for sustained growth in earnings and margins", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    source: SourceArgs,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Give up on a data source call after this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Companies whose reported EPS rose in each of the last N years
    Eps {
        /// Number of consecutive years of rising EPS
        #[arg(short, long)]
        years: Option<usize>,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Companies per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Companies meeting every requested growth criterion
    Financials {
        /// Years of rising EPS
        #[arg(long)]
        eps_years: Option<usize>,

        /// Years of rising operating margin
        #[arg(long)]
        operating_margin_years: Option<usize>,

        /// Years of rising gross margin
        #[arg(long)]
        gross_margin_years: Option<usize>,

        /// Years of rising net profit margin
        #[arg(long)]
        net_profit_margin_years: Option<usize>,

        /// Minimum operating margin (percent) in every year screened
        #[arg(long, allow_negative_numbers = true)]
        min_operating_margin: Option<f64>,

        /// Years the minimum operating margin must hold for
        #[arg(long)]
        min_operating_margin_years: Option<usize>,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Companies per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// List screenable metrics
    Metrics {
        /// Filter by category, or look up one metric by name or alias
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Make .env values visible to the env fallbacks of the CLI flags
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let timeout = cli.timeout_secs.map(Duration::from_secs);
    let config = match timeout {
        Some(t) => ScreenConfig::default().with_loader_timeout(t),
        None => ScreenConfig::default(),
    };

    match cli.command {
        Commands::Eps {
            years,
            page,
            page_size,
        } => {
            let loader = data::build_loader(&cli.source, timeout)?;
            let years = years.unwrap_or(config.default_eps_years);
            let page_size = page_size.unwrap_or(config.default_page_size);
            cmd::eps::run(loader, config, years, page, page_size, cli.format).await?;
        }
        Commands::Financials {
            eps_years,
            operating_margin_years,
            gross_margin_years,
            net_profit_margin_years,
            min_operating_margin,
            min_operating_margin_years,
            page,
            page_size,
        } => {
            let loader = data::build_loader(&cli.source, timeout)?;
            let query = tendenza_screen::GrowthQuery {
                eps_years,
                operating_margin_years,
                gross_margin_years,
                net_profit_margin_years,
                min_operating_margin,
                min_operating_margin_years,
                page_number: page,
                page_size: page_size.unwrap_or(config.default_page_size),
            };
            cmd::financials::run(loader, config, &query, cli.format).await?;
        }
        Commands::Metrics { category } => {
            cmd::metrics::list_metrics(category.as_deref(), cli.verbose, cli.format)?;
        }
    }

    Ok(())
}
