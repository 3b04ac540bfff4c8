//! Table output for the product list.
//!
//! Rendering never talks to a terminal directly. Colors go through the
//! [`Highlight`] capability, so the same code writes escape codes to a real
//! console and plain text into a test buffer.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};
use product_tally_core::{Product, ProductList};
use rust_decimal::Decimal;

/// Horizontal rule printed around tables and after each added product.
pub const SEPARATOR: &str = "----------------------------------------------------------";

/// Kind of message being written, used to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Main menu hint.
    Banner,
    /// Product added.
    Success,
    /// Rejected input, empty search.
    Error,
    /// Option list after the summary.
    Options,
    /// A row matching a search.
    Match,
}

/// Capability to visually distinguish text.
pub trait Highlight {
    /// Style `text` for the given tone.
    fn paint(&self, text: &str, tone: Tone) -> String;

    /// Style a table row, emphasized or not.
    fn highlight(&self, row: &str, emphasis: bool) -> String {
        if emphasis {
            self.paint(row, Tone::Match)
        } else {
            row.to_owned()
        }
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlight for PlainHighlighter {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_owned()
    }
}

/// Colors text with ANSI escape codes.
#[derive(Debug, Clone, Copy)]
pub struct AnsiHighlighter {
    _private: (),
}

impl AnsiHighlighter {
    /// Create the highlighter.
    ///
    /// Forces crossterm to emit colors even when `NO_COLOR` is set; whether
    /// to color at all is decided by [`ColorChoice`](crate::ColorChoice).
    #[must_use]
    pub fn new() -> Self {
        crossterm::style::force_color_output(true);
        Self { _private: () }
    }
}

impl Default for AnsiHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlight for AnsiHighlighter {
    fn paint(&self, text: &str, tone: Tone) -> String {
        let color = match tone {
            Tone::Banner => Color::Yellow,
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Options => Color::Blue,
            Tone::Match => Color::Magenta,
        };
        style(text).with(color).to_string()
    }
}

/// Column layout of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    column_width: usize,
}

impl TableLayout {
    #[must_use]
    pub const fn new(column_width: usize) -> Self {
        Self { column_width }
    }

    #[must_use]
    pub const fn column_width(&self) -> usize {
        self.column_width
    }

    /// Two padded columns followed by an unpadded last column.
    ///
    /// Text longer than the column is not cut.
    #[must_use]
    pub fn row(&self, first: &str, second: &str, last: &str) -> String {
        let width = self.column_width;
        format!("{first:<width$}{second:<width$}{last}")
    }

    #[must_use]
    pub fn header(&self) -> String {
        self.row("Category", "Product", "Price")
    }

    #[must_use]
    pub fn product_row(&self, product: &Product) -> String {
        self.row(
            product.category().as_str(),
            product.name().as_str(),
            &product.price().to_string(),
        )
    }

    #[must_use]
    pub fn total_row(&self, total: Decimal) -> String {
        self.row("", "Total amount:", &total.to_string())
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COLUMN_WIDTH)
    }
}

/// Write every product in price order followed by the total.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W>(out: &mut W, products: &ProductList, layout: &TableLayout) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{}", layout.header())?;
    for product in products.sorted_by_price() {
        writeln!(out, "{}", layout.product_row(product))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", layout.total_row(products.total()))?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Write every product in price order, emphasizing those matching `query`.
///
/// When nothing matches, writes a single notice instead of the table.
/// Returns the number of matching products.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_search<W, H>(
    out: &mut W,
    products: &ProductList,
    query: &str,
    layout: &TableLayout,
    highlighter: &H,
) -> io::Result<usize>
where
    W: Write + ?Sized,
    H: Highlight + ?Sized,
{
    let matches = products.matching(query);
    if matches.is_empty() {
        writeln!(
            out,
            "{}",
            highlighter.paint("No matching products found.", Tone::Error)
        )?;
        return Ok(0);
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{}", layout.header())?;
    for product in products.sorted_by_price() {
        let emphasis = matches.contains(&product);
        writeln!(
            out,
            "{}",
            highlighter.highlight(&layout.product_row(product), emphasis)
        )?;
    }
    writeln!(out, "{SEPARATOR}")?;
    Ok(matches.len())
}
