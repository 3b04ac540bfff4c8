//! Integration tests for the product tally.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p product-tally-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Complete sessions typed through an in-memory console
//!
//! The helpers here drive a [`Session`] with a fixed script of input lines
//! and collect everything it wrote.

use std::io::Cursor;

use product_tally_cli::{Highlight, PlainHighlighter, Session, SessionEnd, TableLayout};
use product_tally_core::ProductList;

/// Everything observable about a finished scripted session.
#[derive(Debug)]
pub struct Transcript {
    pub end: SessionEnd,
    pub output: String,
    pub products: ProductList,
}

impl Transcript {
    /// Output lines, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

/// Run a session over `lines` (one input line each) without colors.
///
/// # Panics
///
/// Panics if the session fails; in-memory I/O cannot fail.
#[must_use]
pub fn run_script(lines: &[&str]) -> Transcript {
    run_script_with(lines, PlainHighlighter, TableLayout::default())
}

/// Run a session over `lines` with a chosen highlighter and layout.
///
/// # Panics
///
/// Panics if the session fails or writes invalid UTF-8.
#[must_use]
pub fn run_script_with<H: Highlight>(
    lines: &[&str],
    highlighter: H,
    layout: TableLayout,
) -> Transcript {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::new(
        Cursor::new(script.into_bytes()),
        Vec::new(),
        highlighter,
        layout,
    );
    let end = session.run().expect("in-memory session should not fail");
    let (output, products) = session.into_parts();

    Transcript {
        end,
        output: String::from_utf8(output).expect("session output should be UTF-8"),
        products,
    }
}
