//! Customer entity.

use common::CustomerId;

use crate::entity::Entity;
use crate::event::CustomerAddressChangedEvent;

use super::{Address, CustomerError};

/// Customer entity.
///
/// A customer starts inactive and without an address; an address is
/// mandatory before activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn entity_type() -> &'static str {
        "Customer"
    }
}

impl Customer {
    /// Creates a new customer with a validated name.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Result<Self, CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(Self {
            id,
            name,
            address: None,
            active: false,
            reward_points: 0,
        })
    }

    /// Rehydrates a customer from stored state.
    ///
    /// Used by repositories; applies the same name validation as [`new`].
    ///
    /// [`new`]: Customer::new
    pub fn from_parts(
        id: CustomerId,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: u64,
    ) -> Result<Self, CustomerError> {
        let mut customer = Self::new(id, name)?;
        customer.address = address;
        customer.active = active;
        customer.reward_points = reward_points;
        Ok(customer)
    }

    /// Returns the customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the customer's address, if one was set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns whether the customer is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the customer's accumulated reward points.
    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    /// Renames the customer.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the customer's address and returns the corresponding event
    /// for the caller to dispatch.
    pub fn change_address(&mut self, address: Address) -> CustomerAddressChangedEvent {
        let event = CustomerAddressChangedEvent::new(self.id, self.name.clone(), address.clone());
        self.address = Some(address);
        event
    }

    /// Activates the customer. An address must be set first.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    /// Deactivates the customer.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Adds reward points to the customer's balance.
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
    }

    #[test]
    fn name_is_required() {
        let result = Customer::new(CustomerId::new(), "");
        assert_eq!(result.unwrap_err(), CustomerError::NameRequired);
    }

    #[test]
    fn new_customer_is_inactive_without_address() {
        let customer = Customer::new(CustomerId::new(), "Customer 1").unwrap();
        assert!(!customer.is_active());
        assert!(customer.address().is_none());
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn change_name_validates() {
        let mut customer = Customer::new(CustomerId::new(), "Customer 1").unwrap();
        assert_eq!(
            customer.change_name("  ").unwrap_err(),
            CustomerError::NameRequired
        );
        customer.change_name("Customer 2").unwrap();
        assert_eq!(customer.name(), "Customer 2");
    }

    #[test]
    fn activation_requires_an_address() {
        let mut customer = Customer::new(CustomerId::new(), "Customer 1").unwrap();
        assert_eq!(customer.activate().unwrap_err(), CustomerError::AddressRequired);

        customer.change_address(address());
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn change_address_returns_the_event() {
        let mut customer = Customer::new(CustomerId::new(), "Customer 1").unwrap();
        let event = customer.change_address(address());

        assert_eq!(event.customer_id, customer.id());
        assert_eq!(event.name, "Customer 1");
        assert_eq!(event.address.street(), "Street 1");
        assert_eq!(customer.address().unwrap().street(), "Street 1");
    }

    #[test]
    fn reward_points_accumulate() {
        let mut customer = Customer::new(CustomerId::new(), "Customer 1").unwrap();
        customer.add_reward_points(10);
        customer.add_reward_points(5);
        assert_eq!(customer.reward_points(), 15);
    }

    #[test]
    fn from_parts_rehydrates_state() {
        let id = CustomerId::new();
        let customer =
            Customer::from_parts(id, "Customer 1", Some(address()), true, 42).unwrap();
        assert_eq!(customer.id(), id);
        assert!(customer.is_active());
        assert_eq!(customer.reward_points(), 42);
    }
}
