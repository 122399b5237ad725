//! Product entity.

use common::ProductId;

use crate::entity::Entity;
use crate::money::Money;

use super::ProductError;

/// Product entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn entity_type() -> &'static str {
        "Product"
    }
}

impl Product {
    /// Creates a new product with a validated name and price.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Result<Self, ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(Self { id, name, price })
    }

    /// Returns the product's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product's price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Renames the product.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Changes the product's price.
    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        self.price = price;
        Ok(())
    }
}
