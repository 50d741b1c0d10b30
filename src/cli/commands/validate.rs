//! Validate command implementation
//!
//! Loads and processes an export, then lists every diagnostic. With
//! `--strict` the command fails when any row was flagged or dropped.

use super::shared::{CommandOutcome, load_and_process, load_configuration};
use crate::app::services::sheet_loader::LoadedSheet;
use crate::cli::args::ValidateArgs;
use crate::{ProcessedSheet, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<CommandOutcome> {
    let start_time = Instant::now();
    debug!("Validation arguments: {:?}", args);

    load_configuration(&args.common)?;
    let (loaded, sheet) = load_and_process(&args.input).await?;
    let dropped = dropped_row_count(&loaded, &sheet);

    print!("{}", render_validation(&loaded, &sheet, dropped));

    let mut outcome = CommandOutcome::from_sheet(&sheet).with_elapsed(start_time.elapsed());
    if args.strict && (outcome.flagged > 0 || dropped > 0) {
        warn!(
            "Strict validation failed: {} flagged, {} dropped",
            outcome.flagged, dropped
        );
        outcome.check_failed = true;
    }

    info!(
        "Validation completed in {:.2}s",
        outcome.elapsed.as_secs_f64()
    );
    Ok(outcome)
}

/// Rows that had content but produced no product
pub fn dropped_row_count(loaded: &LoadedSheet, sheet: &ProcessedSheet) -> usize {
    let non_blank = loaded.rows.iter().filter(|row| !row.is_blank()).count();
    non_blank.saturating_sub(sheet.product_count())
}

/// Render the validation listing
pub fn render_validation(loaded: &LoadedSheet, sheet: &ProcessedSheet, dropped: usize) -> String {
    let mut lines = Vec::new();

    let status = if sheet.is_clean() && dropped == 0 {
        "PASS".bright_green().bold()
    } else {
        "ISSUES".bright_yellow().bold()
    };
    lines.push(format!("Validation: {}", status));
    lines.push(format!(
        "  Rows read: {} ({} unreadable records skipped)",
        loaded.rows.len(),
        loaded.stats.records_skipped
    ));
    lines.push(format!(
        "  Products: {} ({} flagged, {} dropped)",
        sheet.product_count(),
        sheet.flagged_count(),
        dropped
    ));
    lines.push(format!("  Currency: {}", sheet.summary.currency));

    if sheet.errors.is_empty() {
        lines.push("  No diagnostics".to_string());
    } else {
        lines.push(format!("  Diagnostics ({}):", sheet.error_count()));
        for diagnostic in &sheet.errors {
            lines.push(format!("    {}", diagnostic));
        }
    }

    for warning in &loaded.stats.warnings {
        lines.push(format!("  {}", warning.yellow()));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
