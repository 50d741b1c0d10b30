//! Command-line argument definitions for product metrics
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::services::report::{SortDirection, SortField, TableQuery};
use crate::config::Config;
use crate::constants::DEFAULT_EXPORT_FILE_NAME;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the product metrics reporter
///
/// Reads a spreadsheet export of products and reports profit, margin,
/// investment recovery and remaining inventory.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "product-metrics",
    version,
    about = "Profit and inventory metrics from a product spreadsheet export",
    long_about = "Reads a CSV export with Producto, Costo, PrecioVenta, CantidadVendida and \
                  CantidadComprada columns, validates every row, and reports per-product and \
                  aggregate profit, margin, investment recovery and remaining inventory."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the product report for an export
    Report(ReportArgs),
    /// Check an export and list its diagnostics
    Validate(ValidateArgs),
    /// Write the queried product table to a CSV file
    Export(ExportArgs),
    /// Reprint the report whenever the export changes
    Watch(WatchArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file with display, rankings and watch sections.
    /// If not specified, looks for <config dir>/product-metrics/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Table search, sort and pagination options
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct QueryArgs {
    /// Only include products whose name contains this text (case-insensitive)
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long = "sort", value_enum, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort direction
    #[arg(long = "direction", value_enum, value_name = "DIR")]
    pub direction: Option<SortDirection>,

    /// Page number, starting at 1
    #[arg(short = 'p', long = "page", value_name = "N")]
    pub page: Option<usize>,

    /// Rows per page (10, 25 or 50)
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Spreadsheet export to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub format: OutputFormat,

    /// Print every matching row instead of one page
    #[arg(long = "all", help = "Print every matching row instead of one page")]
    pub all_rows: bool,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Spreadsheet export to check
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Exit with status 1 when any row is flagged or dropped
    #[arg(long = "strict")]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Spreadsheet export to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Destination CSV file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_EXPORT_FILE_NAME
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the watch command
#[derive(Debug, Clone, Parser)]
pub struct WatchArgs {
    /// Spreadsheet export to watch
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Seconds between checks, overriding the configuration
    #[arg(short = 'i', long = "interval", value_name = "SECONDS")]
    pub interval_secs: Option<u64>,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format of the queried table
    Csv,
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Report(args) => &args.common,
            Commands::Validate(args) => &args.common,
            Commands::Export(args) => &args.common,
            Commands::Watch(args) => &args.common,
        }
    }

    pub fn input(&self) -> &PathBuf {
        match self {
            Commands::Report(args) => &args.input,
            Commands::Validate(args) => &args.input,
            Commands::Export(args) => &args.input,
            Commands::Watch(args) => &args.input,
        }
    }
}

impl CommonArgs {
    /// Get log level based on verbosity and quiet settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validate shared arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

impl QueryArgs {
    /// Build the table state from configuration defaults and these overrides
    ///
    /// Choosing a sort column without a direction sorts descending, the same
    /// as clicking a new column header.
    pub fn build_query(&self, config: &Config) -> Result<TableQuery> {
        let mut query = config.table_query();

        if let Some(field) = self.sort {
            query.sort_field = field;
            query.sort_direction = SortDirection::Desc;
        }
        if let Some(direction) = self.direction {
            query.sort_direction = direction;
        }
        if let Some(page_size) = self.page_size {
            query.set_page_size(page_size)?;
        }
        if let Some(search) = &self.search {
            query.set_search(search.clone());
        }
        if let Some(page) = self.page {
            if page == 0 {
                return Err(Error::configuration("Page numbers start at 1"));
            }
            query.page = page;
        }

        query.validate()?;
        Ok(query)
    }
}
