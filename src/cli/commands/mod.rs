//! Command implementations for the product metrics CLI
//!
//! Each command is implemented in its own module:
//! - `report`: Terminal, JSON or CSV report of a processed export
//! - `validate`: Diagnostics listing with an optional strict exit status
//! - `export`: CSV export of the queried product table
//! - `watch`: Report reprinted on every change to the export

pub mod export;
pub mod report;
pub mod shared;
pub mod validate;
pub mod watch;

pub use shared::CommandOutcome;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Sets up logging from the command's verbosity flags, then dispatches to the
/// subcommand handler.
pub async fn run(args: Args) -> Result<CommandOutcome> {
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given"))?;

    shared::setup_logging(command.common());

    match command {
        Commands::Report(report_args) => report::run_report(report_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
        Commands::Watch(watch_args) => watch::run_watch(watch_args).await,
    }
}
