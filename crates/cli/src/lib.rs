//! Product Tally CLI - the interactive console around `product-tally-core`.
//!
//! # Modules
//!
//! - [`config`] - Settings from environment variables and command-line flags
//! - [`render`] - Table output and the [`render::Highlight`] capability
//! - [`session`] - The prompt loop that gathers products and shows reports
//! - [`error`] - Error types surfaced by the binary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use config::{ColorChoice, ConfigError, LogFormat, TallyConfig};
pub use error::{CliError, SessionError};
pub use render::{AnsiHighlighter, Highlight, PlainHighlighter, TableLayout, Tone};
pub use session::{Session, SessionEnd};
