//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TALLY_COLOR` - `auto`, `always` or `never` (default: `auto`)
//! - `NO_COLOR` - When set to a non-empty value, the default becomes `never`
//! - `TALLY_COLUMN_WIDTH` - Width of the Category and Product columns (default: 20)
//! - `TALLY_LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `RUST_LOG` - Log filter (default: `product_tally_cli=warn`)
//!
//! Command-line flags override the environment, see [`TallyConfig::with_overrides`].

use std::str::FromStr;

use thiserror::Error;

/// Default width of the Category and Product columns.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// When to emit terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve `Auto` against whether output goes to a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("expected auto, always or never, got {other:?}")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected text or json, got {other:?}")),
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// When to color output
    pub color: ColorChoice,
    /// Padding width of the Category and Product columns
    pub column_width: usize,
    /// Format of log lines on stderr
    pub log_format: LogFormat,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            column_width: DEFAULT_COLUMN_WIDTH,
            log_format: LogFormat::Text,
        }
    }
}

impl TallyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let color = match lookup("TALLY_COLOR") {
            Some(value) => parse_var("TALLY_COLOR", &value)?,
            None if no_color => ColorChoice::Never,
            None => ColorChoice::Auto,
        };

        let column_width = match lookup("TALLY_COLUMN_WIDTH") {
            Some(value) => parse_column_width(&value)?,
            None => DEFAULT_COLUMN_WIDTH,
        };

        let log_format = match lookup("TALLY_LOG_FORMAT") {
            Some(value) => parse_var("TALLY_LOG_FORMAT", &value)?,
            None => LogFormat::Text,
        };

        Ok(Self {
            color,
            column_width,
            log_format,
        })
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        color: Option<ColorChoice>,
        column_width: Option<usize>,
    ) -> Self {
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(width) = column_width {
            self.column_width = width;
        }
        self
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

fn parse_column_width(value: &str) -> Result<usize, ConfigError> {
    let width = value
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar("TALLY_COLUMN_WIDTH".to_string(), e.to_string()))?;
    if width == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "TALLY_COLUMN_WIDTH".to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(width)
}
