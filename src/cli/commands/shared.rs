//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::sheet_loader::{LoadedSheet, load_sheet_file};
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{ProcessedSheet, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// What a command did, for the exit status and final log line
#[derive(Debug, Clone, Default)]
pub struct CommandOutcome {
    /// Product rows in the processed sheet
    pub products: usize,
    /// Rows flagged with a defect
    pub flagged: usize,
    /// Diagnostics raised while processing
    pub diagnostics: usize,
    /// Rows written to an output file
    pub rows_written: usize,
    /// Set when a strict check failed and the process should exit non-zero
    pub check_failed: bool,
    /// Total command time
    pub elapsed: Duration,
}

impl CommandOutcome {
    /// Counts taken from a processed sheet
    pub fn from_sheet(sheet: &ProcessedSheet) -> Self {
        Self {
            products: sheet.product_count(),
            flagged: sheet.flagged_count(),
            diagnostics: sheet.error_count(),
            ..Self::default()
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the verbosity flags. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn setup_logging(args: &CommonArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("product_metrics={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (defaults -> file)
///
/// An explicit `--config` file must exist; the default location is only used
/// when present.
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    args.validate()?;

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults");
    }

    let config = Config::load_layered(config_file)?;
    config.validate()?;

    Ok(config)
}

/// Read and process an export in one step
pub async fn load_and_process(path: &Path) -> Result<(LoadedSheet, ProcessedSheet)> {
    let loaded = load_sheet_file(path).await?;
    let sheet = loaded.process();
    info!("{}", sheet.summary_line());
    Ok((loaded, sheet))
}
