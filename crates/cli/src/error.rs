//! Error types for the console.
//!
//! Invalid input never reaches these types: the session re-prompts for it.
//! Only a broken terminal or bad configuration ends a run with an error.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading a line or writing output failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the `tally` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
