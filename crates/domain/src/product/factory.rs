//! Product factory.

use common::ProductId;

use crate::money::Money;

use super::{Product, ProductError};

/// Creates products with generated identifiers.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a new product with the given name and price.
    pub fn create(name: impl Into<String>, price: Money) -> Result<Product, ProductError> {
        Product::new(ProductId::new(), name, price)
    }
}
