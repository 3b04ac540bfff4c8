//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so that summing many entries never drifts
//! the way binary floating point does. The scale the user typed is kept, so
//! `3.50` is displayed as `3.50`, while comparisons are numeric (`3.5 == 3.50`).

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a decimal number")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A strictly positive amount.
///
/// No currency is attached; the tally only ever adds amounts together.
///
/// ## Examples
///
/// ```
/// use product_tally_core::Price;
///
/// assert!(Price::parse("9.99").is_ok());
/// assert!(Price::parse(" 3.50 ").is_ok());
///
/// assert!(Price::parse("0").is_err());     // not positive
/// assert!(Price::parse("-1.00").is_err()); // not positive
/// assert!(Price::parse("abc").is_err());   // not a number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Parse a `Price` from a string, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is not
    /// strictly greater than zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s.trim().parse().map_err(|_| PriceError::NotANumber)?;
        Self::new(amount)
    }

    /// Wrap an already-parsed amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `amount` is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert!(Price::parse("9.99").is_ok());
        assert!(Price::parse("1").is_ok());
        assert!(Price::parse("0.01").is_ok());
        assert!(Price::parse("  12.5\n").is_ok());
        assert!(Price::parse("1000000").is_ok());
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse(""), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("$5"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("1.2.3"), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_parse_not_positive() {
        assert_eq!(Price::parse("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("0.00"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("-4.20"), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_display_keeps_scale() {
        assert_eq!(Price::parse("3.50").unwrap().to_string(), "3.50");
        assert_eq!(Price::parse("9.99").unwrap().to_string(), "9.99");
        assert_eq!(Price::parse("7").unwrap().to_string(), "7");
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(Price::parse("3.5").unwrap(), Price::parse("3.50").unwrap());
        assert!(Price::parse("3.49").unwrap() < Price::parse("3.5").unwrap());
    }

    #[test]
    fn test_serializes_as_string() {
        let price = Price::parse("19.99").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"19.99\"");
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        let result: Result<Price, _> = serde_json::from_str("\"0\"");
        assert!(result.is_err());
    }
}
