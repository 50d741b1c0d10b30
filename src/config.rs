//! Configuration management and validation.
//!
//! Provides the report display defaults, ranking sizes and watch polling
//! settings. Values come from built-in defaults, then an optional TOML file,
//! then command-line overrides.

use crate::app::services::report::{SortDirection, SortField, TableQuery};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DIAGNOSTICS_DISPLAY_LIMIT, DEFAULT_PAGE_SIZE,
    DEFAULT_PROFIT_NAME_WIDTH, DEFAULT_RECOVERY_NAME_WIDTH, DEFAULT_RECOVERY_RANKING_LIMIT,
    DEFAULT_TOP_PROFIT_LIMIT, DEFAULT_WATCH_INTERVAL_SECS, PAGE_SIZE_OPTIONS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Product table display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows per page; one of 10, 25 or 50
    pub page_size: usize,

    /// Column the table is sorted by on first display
    pub sort_field: SortField,

    pub sort_direction: SortDirection,

    /// Diagnostics listed before the rest are summarized
    pub diagnostics_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            diagnostics_limit: DEFAULT_DIAGNOSTICS_DISPLAY_LIMIT,
        }
    }
}

/// Ranking sizes and label widths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingsConfig {
    pub top_profit_limit: usize,
    pub recovery_limit: usize,

    /// Characters of the product name kept in profit ranking labels
    pub profit_name_width: usize,

    /// Characters of the product name kept in recovery ranking labels
    pub recovery_name_width: usize,
}

impl Default for RankingsConfig {
    fn default() -> Self {
        Self {
            top_profit_limit: DEFAULT_TOP_PROFIT_LIMIT,
            recovery_limit: DEFAULT_RECOVERY_RANKING_LIMIT,
            profit_name_width: DEFAULT_PROFIT_NAME_WIDTH,
            recovery_name_width: DEFAULT_RECOVERY_NAME_WIDTH,
        }
    }
}

/// File watching settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between modification time checks
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_WATCH_INTERVAL_SECS,
        }
    }
}

/// Global configuration for report generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub rankings: RankingsConfig,
    pub watch: WatchConfig,
}

impl Config {
    /// Set the page size (builder pattern)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.display.page_size = page_size;
        self
    }

    /// Set the default sort (builder pattern)
    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.display.sort_field = field;
        self.display.sort_direction = direction;
        self
    }

    /// Set the diagnostics display limit (builder pattern)
    pub fn with_diagnostics_limit(mut self, limit: usize) -> Self {
        self.display.diagnostics_limit = limit;
        self
    }

    /// Set the watch polling interval (builder pattern)
    pub fn with_watch_interval(mut self, interval_secs: u64) -> Self {
        self.watch.interval_secs = interval_secs;
        self
    }

    /// Default configuration file location
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    ///
    /// Sections and keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config_parse(path.display().to_string(), e))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, overlaid with the given file when there is one
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every setting is usable
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.display.page_size) {
            return Err(Error::configuration(format!(
                "Page size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.display.page_size
            )));
        }

        if self.display.diagnostics_limit == 0 {
            return Err(Error::configuration(
                "Diagnostics limit must be greater than 0",
            ));
        }

        if self.rankings.profit_name_width == 0 || self.rankings.recovery_name_width == 0 {
            return Err(Error::configuration(
                "Ranking name widths must be greater than 0",
            ));
        }

        if self.watch.interval_secs == 0 {
            return Err(Error::configuration(
                "Watch interval must be at least 1 second",
            ));
        }

        Ok(())
    }

    /// Initial table state for these display settings
    pub fn table_query(&self) -> TableQuery {
        TableQuery::new()
            .with_sort(self.display.sort_field, self.display.sort_direction)
            .with_page_size(self.display.page_size)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_secs(self.watch.interval_secs)
    }
}
