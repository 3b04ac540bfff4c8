//! Parsers for the lines a user types at each console prompt.
//!
//! Each prompt has one pure function here. The console loop owns reading and
//! re-prompting; these functions only decide whether a line is acceptable.

use std::str::FromStr;

use crate::types::{Category, Price, ProductName};

/// Why a typed line was rejected.
///
/// Every variant is recovered by showing the message and asking again.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Product cannot be empty")]
    EmptyProductName,
    /// Not a decimal number, or not greater than zero.
    #[error("Invalid price")]
    InvalidPrice,
    #[error("Invalid input")]
    InvalidMenuChoice,
}

/// What the category prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEntry {
    /// The user typed `q`: stop entering products and show the summary.
    Finish,
    Category(Category),
}

/// Options offered after the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `p`: go back to entering products.
    AddProduct,
    /// `s`: search by product name.
    Search,
    /// `q`: end the session.
    Quit,
}

impl FromStr for MenuChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" => Ok(Self::AddProduct),
            "s" => Ok(Self::Search),
            "q" => Ok(Self::Quit),
            _ => Err(ValidationError::InvalidMenuChoice),
        }
    }
}

/// Parse the category prompt.
///
/// `q` in any case finishes entry, so a category literally named "q" cannot
/// be recorded.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyCategory`] for blank input.
pub fn parse_category(raw: &str) -> Result<CategoryEntry, ValidationError> {
    let category = Category::parse(raw).map_err(|_| ValidationError::EmptyCategory)?;
    if category.as_str().eq_ignore_ascii_case("q") {
        return Ok(CategoryEntry::Finish);
    }
    Ok(CategoryEntry::Category(category))
}

/// Parse the product prompt. Used both for new products and for searches.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyProductName`] for blank input.
pub fn parse_product_name(raw: &str) -> Result<ProductName, ValidationError> {
    ProductName::parse(raw).map_err(|_| ValidationError::EmptyProductName)
}

/// Parse the price prompt.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] unless the input is a decimal
/// number greater than zero.
pub fn parse_price(raw: &str) -> Result<Price, ValidationError> {
    Price::parse(raw).map_err(|_| ValidationError::InvalidPrice)
}

/// Parse the option prompt shown after the summary.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMenuChoice`] for anything other than
/// `p`, `s` or `q`.
pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, ValidationError> {
    raw.parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accepts_trimmed_text() {
        let entry = parse_category("  Books ").unwrap();
        assert_eq!(
            entry,
            CategoryEntry::Category(Category::parse("Books").unwrap())
        );
    }

    #[test]
    fn test_category_q_finishes() {
        assert_eq!(parse_category("q"), Ok(CategoryEntry::Finish));
        assert_eq!(parse_category(" Q \n"), Ok(CategoryEntry::Finish));
    }

    #[test]
    fn test_category_starting_with_q_is_a_category() {
        assert!(matches!(
            parse_category("quilts"),
            Ok(CategoryEntry::Category(_))
        ));
    }

    #[test]
    fn test_category_empty() {
        assert_eq!(parse_category("   "), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn test_product_name() {
        assert_eq!(parse_product_name(" Lamp ").unwrap().as_str(), "Lamp");
        assert_eq!(parse_product_name(""), Err(ValidationError::EmptyProductName));
    }

    #[test]
    fn test_price() {
        assert_eq!(parse_price("4.25").unwrap().to_string(), "4.25");
        assert_eq!(parse_price("zero"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("0"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("-2"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(parse_menu_choice("p"), Ok(MenuChoice::AddProduct));
        assert_eq!(parse_menu_choice(" S "), Ok(MenuChoice::Search));
        assert_eq!(parse_menu_choice("Q\n"), Ok(MenuChoice::Quit));
        assert_eq!(
            parse_menu_choice("quit"),
            Err(ValidationError::InvalidMenuChoice)
        );
        assert_eq!(parse_menu_choice(""), Err(ValidationError::InvalidMenuChoice));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyCategory.to_string(),
            "Category cannot be empty"
        );
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Invalid price");
    }
}
