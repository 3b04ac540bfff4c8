//! A single recorded product.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductName};

/// A product entry: category, name and price.
///
/// All three fields are validated by their own types, so constructing a
/// `Product` cannot fail. Fields are private; a product never changes once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    category: Category,
    name: ProductName,
    price: Price,
}

impl Product {
    /// Create a new product from already-validated parts.
    #[must_use]
    pub const fn new(category: Category, name: ProductName, price: Price) -> Self {
        Self {
            category,
            name,
            price,
        }
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub const fn name(&self) -> &ProductName {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}
