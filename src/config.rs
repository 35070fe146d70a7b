//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::Path;
use timetravel_tictactoe::HistoryOrder;
use tracing::{debug, info, instrument};

/// Settings for the terminal UI, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// List the history newest first on startup.
    reverse_history: bool,

    /// Highlight the squares of a completed line.
    highlight_win_line: bool,

    /// How long to wait for a key press before redrawing, in milliseconds.
    tick_rate_ms: u64,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            reverse_history: false,
            highlight_win_line: true,
            tick_rate_ms: 250,
            log_filter: "info,timetravel=debug".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be positive".to_string()));
        }
        Ok(config)
    }

    /// Loads the file at `path`, or the defaults when it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Initial history display order.
    pub fn history_order(&self) -> HistoryOrder {
        if self.reverse_history {
            HistoryOrder::Descending
        } else {
            HistoryOrder::Ascending
        }
    }

    /// Applies command-line overrides; flags only ever switch settings on.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, reverse_history: bool, no_highlight: bool) -> Self {
        if reverse_history {
            self.reverse_history = true;
        }
        if no_highlight {
            self.highlight_win_line = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TuiConfig::from_toml("reverse_history = true").expect("valid toml");
        assert!(*config.reverse_history());
        assert!(*config.highlight_win_line());
        assert_eq!(*config.tick_rate_ms(), 250);
        assert_eq!(config.history_order(), HistoryOrder::Descending);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = TuiConfig::from_toml("tick_rate_ms = 0").unwrap_err();
        assert!(err.message.contains("tick_rate_ms"));
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::default().with_overrides(true, true);
        assert_eq!(config.history_order(), HistoryOrder::Descending);
        assert!(!*config.highlight_win_line());

        let untouched = TuiConfig::default().with_overrides(false, false);
        assert_eq!(untouched, TuiConfig::default());
    }
}
