//! Watch command implementation
//!
//! Polls the export's modification time and reprints the report whenever it
//! changes. Runs until interrupted.

use super::report::render_report;
use super::shared::{CommandOutcome, load_and_process, load_configuration};
use crate::cli::args::{OutputFormat, WatchArgs};
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Change tracking between polls
#[derive(Debug, Clone, Default)]
pub struct WatchState {
    last_modified: Option<SystemTime>,
    /// Reports printed so far
    pub reports: usize,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a poll result; true when the report should be rebuilt
    ///
    /// The first observation always triggers a report. A missing file never
    /// does.
    pub fn observe(&mut self, modified: Option<SystemTime>) -> bool {
        match modified {
            Some(time) if self.last_modified != Some(time) => {
                self.last_modified = Some(time);
                true
            }
            _ => false,
        }
    }
}

/// Watch command runner
pub async fn run_watch(args: WatchArgs) -> Result<CommandOutcome> {
    let mut config = load_configuration(&args.common)?;
    if let Some(interval_secs) = args.interval_secs {
        config = config.with_watch_interval(interval_secs);
        config.validate()?;
    }
    let query = args.query.build_query(&config)?;

    if !args.input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            args.input.display()
        )));
    }

    info!(
        "Watching {} every {}s",
        args.input.display(),
        config.watch.interval_secs
    );

    let mut state = WatchState::new();
    let mut ticker = tokio::time::interval(config.watch_interval());

    loop {
        ticker.tick().await;

        if !state.observe(modification_time(&args.input).await) {
            continue;
        }

        debug!("Change detected in {}", args.input.display());
        match load_and_process(&args.input).await {
            Ok((_, sheet)) => {
                let rendered =
                    render_report(&args.input, &sheet, &query, &config, OutputFormat::Human, false)?;
                println!("{}", "-".repeat(72).dimmed());
                print!("{}", rendered);
                state.reports += 1;
            }
            Err(e) => warn!("Could not reload {}: {}", args.input.display(), e),
        }
    }
}

async fn modification_time(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path)
        .await
        .and_then(|metadata| metadata.modified())
        .ok()
}
