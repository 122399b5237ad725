//! Customer factory.

use common::CustomerId;

use super::{Address, Customer, CustomerError};

/// Creates customers with generated identifiers.
pub struct CustomerFactory;

impl CustomerFactory {
    /// Creates a new customer with the given name.
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::new(CustomerId::new(), name)
    }

    /// Creates a new customer with the given name and address.
    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}
