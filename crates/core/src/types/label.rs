//! Free-text labels attached to a product: its category and its name.
//!
//! Use the `define_label!` macro to create a trimmed, non-empty string
//! wrapper so a category can never be passed where a product name is expected.

/// Errors that can occur when parsing a label.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// The input is empty once surrounding whitespace is removed.
    #[error("label cannot be empty")]
    Empty,
}

/// Macro to define a label wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `parse()` that trims the input and rejects empty strings
/// - `Serialize`/`Deserialize` (deserialization goes through `parse()`)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Display`, `FromStr`, `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use product_tally_core::define_label;
/// define_label!(Brand);
///
/// let brand = Brand::parse("  Acme ").unwrap();
/// assert_eq!(brand.as_str(), "Acme");
/// assert!(Brand::parse("   ").is_err());
/// ```
#[macro_export]
macro_rules! define_label {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a label, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns `LabelError::Empty` if nothing is left after trimming.
            pub fn parse(s: &str) -> Result<Self, $crate::types::label::LabelError> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err($crate::types::label::LabelError::Empty);
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the label as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the label and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::label::LabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::types::label::LabelError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(label: $name) -> Self {
                label.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_label!(Category);
define_label!(ProductName);
