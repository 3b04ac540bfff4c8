//! Product Tally Core - Product types and the in-memory product list.
//!
//! This crate provides the types and queries used by the `tally` console:
//! - [`types`] - Newtype wrappers for categories, product names and prices
//! - [`collection`] - The ordered product list with total, sort and search
//! - [`input`] - Pure parsers turning raw console lines into validated values
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no terminal, no
//! stdin/stdout. The interactive shell lives in `product-tally-cli` and calls
//! into this crate, which keeps everything here testable without a console.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod input;
pub mod types;

pub use collection::ProductList;
pub use input::{
    CategoryEntry, MenuChoice, ValidationError, parse_category, parse_menu_choice, parse_price,
    parse_product_name,
};
pub use types::*;
