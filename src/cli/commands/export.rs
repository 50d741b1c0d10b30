//! Export command implementation

use super::shared::{CommandOutcome, load_and_process, load_configuration};
use crate::app::services::report::export_to_path;
use crate::cli::args::ExportArgs;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Export command runner
///
/// Writes every row matching the query, in sort order, ignoring pagination.
pub async fn run_export(args: ExportArgs) -> Result<CommandOutcome> {
    let start_time = Instant::now();
    debug!("Export arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let query = args.query.build_query(&config)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(Error::configuration(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }
    }

    let (_, sheet) = load_and_process(&args.input).await?;
    let rows = query.apply(&sheet.products);
    let written = export_to_path(&args.output, &rows)?;

    println!(
        "{} {} products to {}",
        "Exported".bright_green().bold(),
        written,
        args.output.display()
    );

    let mut outcome = CommandOutcome::from_sheet(&sheet).with_elapsed(start_time.elapsed());
    outcome.rows_written = written;
    info!("Export completed in {:.2}s", outcome.elapsed.as_secs_f64());
    Ok(outcome)
}
