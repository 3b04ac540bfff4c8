//! The interactive prompt loop.
//!
//! A [`Session`] owns its input, output and product list, so it can run
//! against a real console or against in-memory buffers in tests.
//!
//! Flow:
//! 1. Entry: ask for a category, product and price, add the product, repeat.
//! 2. Typing `q` as the category prints the report and offers options:
//!    `p` goes back to entry, `s` searches, `q` ends the session.

use std::io::{BufRead, Write};

use product_tally_core::{
    CategoryEntry, MenuChoice, Product, ProductList, ValidationError, parse_category,
    parse_menu_choice, parse_price, parse_product_name,
};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::render::{self, Highlight, SEPARATOR, TableLayout, Tone};

const BANNER: &str = "To enter a new product - follow the steps | to quit - enter: \"Q\"";
const OPTIONS: &str = "To enter a new product - enter \"P\" | To search for a product - enter \"S\" | To quit - enter: \"Q\"";
const ADDED: &str = "The product was successfully added!";

const CATEGORY_PROMPT: &str = "Enter a Category: ";
const PRODUCT_PROMPT: &str = "Enter a Product: ";
const PRICE_PROMPT: &str = "Enter a Price: ";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `q` from the options.
    Quit,
    /// Input reached end of file.
    InputClosed,
}

/// What to show before each attempt at reading a line.
#[derive(Clone, Copy)]
enum Prompt<'a> {
    /// Written without a newline; the answer is typed on the same line.
    Inline(&'a str),
    /// A full colored line; the answer is typed on the next line.
    Line(&'a str, Tone),
}

/// Where the loop goes after the summary options.
enum Next {
    Entry,
    End(SessionEnd),
}

/// One interactive session.
pub struct Session<R, W, H> {
    input: R,
    output: W,
    highlighter: H,
    layout: TableLayout,
    products: ProductList,
}

impl<R, W, H> Session<R, W, H>
where
    R: BufRead,
    W: Write,
    H: Highlight,
{
    pub const fn new(input: R, output: W, highlighter: H, layout: TableLayout) -> Self {
        Self {
            input,
            output,
            highlighter,
            layout,
            products: ProductList::new(),
        }
    }

    /// Consume the session, returning the output sink and the products.
    pub fn into_parts(self) -> (W, ProductList) {
        (self.output, self.products)
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if reading or writing fails.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        info!("Session started");
        let end = self.run_loop()?;
        info!(products = self.products.len(), ?end, "Session ended");
        Ok(end)
    }

    fn run_loop(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            self.say(BANNER, Tone::Banner)?;

            let prompt = Prompt::Inline(CATEGORY_PROMPT);
            let Some(entry) = self.ask(prompt, parse_category)? else {
                return Ok(SessionEnd::InputClosed);
            };

            match entry {
                CategoryEntry::Finish => {
                    render::write_report(&mut self.output, &self.products, &self.layout)?;
                    match self.options()? {
                        Next::Entry => {}
                        Next::End(end) => return Ok(end),
                    }
                }
                CategoryEntry::Category(category) => {
                    let prompt = Prompt::Inline(PRODUCT_PROMPT);
                    let Some(name) = self.ask(prompt, parse_product_name)? else {
                        return Ok(SessionEnd::InputClosed);
                    };
                    let Some(price) = self.ask(Prompt::Inline(PRICE_PROMPT), parse_price)? else {
                        return Ok(SessionEnd::InputClosed);
                    };

                    debug!(%category, %name, %price, "Product added");
                    self.products.add(Product::new(category, name, price));

                    self.say(ADDED, Tone::Success)?;
                    writeln!(self.output, "{SEPARATOR}")?;
                }
            }
        }
    }

    /// Offer options until the user goes back to entry or ends the session.
    fn options(&mut self) -> Result<Next, SessionError> {
        loop {
            let prompt = Prompt::Line(OPTIONS, Tone::Options);
            let Some(choice) = self.ask(prompt, parse_menu_choice)? else {
                return Ok(Next::End(SessionEnd::InputClosed));
            };

            match choice {
                MenuChoice::AddProduct => return Ok(Next::Entry),
                MenuChoice::Quit => return Ok(Next::End(SessionEnd::Quit)),
                MenuChoice::Search => {
                    let prompt = Prompt::Inline(PRODUCT_PROMPT);
                    let Some(query) = self.ask(prompt, parse_product_name)? else {
                        return Ok(Next::End(SessionEnd::InputClosed));
                    };
                    let found = render::write_search(
                        &mut self.output,
                        &self.products,
                        query.as_str(),
                        &self.layout,
                        &self.highlighter,
                    )?;
                    debug!(%query, found, "Search");
                }
            }
        }
    }

    /// Prompt until `parse` accepts a line. `None` means input ended.
    fn ask<T, F>(&mut self, prompt: Prompt<'_>, parse: F) -> Result<Option<T>, SessionError>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            match prompt {
                Prompt::Inline(text) => write!(self.output, "{text}")?,
                Prompt::Line(text, tone) => self.say(text, tone)?,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(error = %err, "Input rejected");
                    self.say(&format!("{err}, please try again!"), Tone::Error)?;
                }
            }
        }
    }

    /// Read one line. Bytes that are not UTF-8 become U+FFFD and go on to
    /// validation like any other text.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn say(&mut self, text: &str, tone: Tone) -> Result<(), SessionError> {
        writeln!(self.output, "{}", self.highlighter.paint(text, tone))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::render::PlainHighlighter;

    fn run(script: &str) -> (SessionEnd, String, ProductList) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (SessionEnd, String, ProductList) {
        let mut session = Session::new(
            Cursor::new(script),
            Vec::new(),
            PlainHighlighter,
            TableLayout::default(),
        );
        let end = session.run().unwrap();
        let (output, products) = session.into_parts();
        (end, String::from_utf8(output).unwrap(), products)
    }

    #[test]
    fn test_quit_immediately() {
        let (end, out, products) = run("q\nq\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(products.is_empty());
        assert!(out.contains("Total amount:       0"));
    }

    #[test]
    fn test_end_of_input_stops_session() {
        let (end, out, _) = run("Tools\nHammer\n");
        assert_eq!(end, SessionEnd::InputClosed);
        assert!(out.ends_with(PRICE_PROMPT));
    }

    #[test]
    fn test_add_one_product() {
        let (_, out, products) = run("Tools\nHammer\n12.50\nq\nq\n");
        assert_eq!(products.len(), 1);
        assert!(out.contains(ADDED));
        assert!(out.contains("Tools               Hammer              12.50"));
    }

    #[test]
    fn test_rejected_input_reprompts() {
        let (_, out, products) = run("\nTools\n \nHammer\nfree\n0\n3\nq\nq\n");
        assert_eq!(products.len(), 1);
        assert_eq!(out.matches("Category cannot be empty, please try again!").count(), 1);
        assert_eq!(out.matches("Product cannot be empty, please try again!").count(), 1);
        assert_eq!(out.matches("Invalid price, please try again!").count(), 2);
        assert_eq!(out.matches(PRICE_PROMPT).count(), 3);
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let (end, out, _) = run("q\nx\nq\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("Invalid input, please try again!"));
        assert_eq!(out.matches(OPTIONS).count(), 2);

        let rejected = out.find("Invalid input, please try again!").unwrap();
        assert!(out.get(rejected..).unwrap().contains(OPTIONS));
    }

    #[test]
    fn test_non_utf8_line_is_validated_not_fatal() {
        let (end, out, products) = run_bytes(b"\xff\xfe\nWidget\n5\nq\n\xff\nq\n");
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(products.len(), 1);
        assert_eq!(
            products.all_items().first().unwrap().category().as_str(),
            "\u{fffd}\u{fffd}"
        );
        assert!(out.contains("Invalid input, please try again!"));
    }

    #[test]
    fn test_back_to_entry_keeps_products() {
        let (_, _, products) = run("A\nOne\n1\nq\np\nB\nTwo\n2\nq\nq\n");
        assert_eq!(products.len(), 2);
    }
}
