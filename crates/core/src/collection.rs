//! The ordered list of products recorded during a session.
//!
//! The list only ever grows. Every query recomputes its ordering from the
//! insertion order; lists are typed in by hand, so a sort per query is cheap
//! and nothing has to be kept in sync on `add`.

use rust_decimal::Decimal;

use crate::types::Product;

/// Products in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    items: Vec<Product>,
}

impl ProductList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product to the end of the list.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Sum of all prices, exact. Zero for an empty list.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, product| {
                sum.saturating_add(product.price().amount())
            })
    }

    /// All products ordered by ascending price.
    ///
    /// Products with equal prices keep their insertion order.
    #[must_use]
    pub fn sorted_by_price(&self) -> Vec<&Product> {
        let mut sorted: Vec<&Product> = self.items.iter().collect();
        sorted.sort_by_key(|product| product.price());
        sorted
    }

    /// Products whose name contains `query`, ignoring case, in price order.
    ///
    /// The query is trimmed first. An empty query matches every product.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.sorted_by_price()
            .into_iter()
            .filter(|product| product.name().as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// All products in insertion order.
    #[must_use]
    pub fn all_items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Product> for ProductList {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
