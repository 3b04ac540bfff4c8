//! Product Tally - record products, then list, total and search them.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive session
//! tally
//!
//! # Never color output, use wider columns
//! tally --color never --column-width 30
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=product_tally_cli=debug` to see every
//! added product, search and rejected input.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;

use clap::Parser;
use crossterm::tty::IsTty;
use product_tally_cli::{
    AnsiHighlighter, CliError, ColorChoice, Highlight, LogFormat, PlainHighlighter, Session,
    TableLayout, TallyConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Record products and print a price-sorted report")]
struct Cli {
    /// When to color output (overrides `TALLY_COLOR`)
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Width of the Category and Product columns (overrides `TALLY_COLUMN_WIDTH`)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    column_width: Option<u16>,
}

/// Initialize tracing with `EnvFilter`, writing to stderr.
fn init_tracing(format: LogFormat) {
    // Defaults to warn for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "product_tally_cli=warn".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
    });
    let text_layer = (format == LogFormat::Text)
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = TallyConfig::from_env();
    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(&cli, config));

    if let Err(e) = result {
        tracing::error!("tally failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: TallyConfig) -> Result<(), CliError> {
    let config = config.with_overrides(cli.color, cli.column_width.map(usize::from));
    tracing::debug!(?config, "Configuration loaded");

    let layout = TableLayout::new(config.column_width);
    if config.color.enabled(io::stdout().is_tty()) {
        interact(AnsiHighlighter::new(), layout)
    } else {
        interact(PlainHighlighter, layout)
    }
}

fn interact<H: Highlight>(highlighter: H, layout: TableLayout) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), highlighter, layout);
    session.run()?;
    Ok(())
}
