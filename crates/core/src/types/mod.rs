//! Core types for the product tally.
//!
//! This module provides type-safe wrappers for the fields of a product.

pub mod label;
pub mod price;
pub mod product;

pub use label::{Category, LabelError, ProductName};
pub use price::{Price, PriceError};
pub use product::Product;
