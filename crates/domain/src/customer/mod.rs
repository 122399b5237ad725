//! Customer entity and related types.

mod address;
mod entity;
mod factory;
mod handlers;

pub use address::Address;
pub use entity::Customer;
pub use factory::CustomerFactory;
pub use handlers::{
    SendFirstCustomerCreatedMessage, SendMessageWhenCustomerAddressChanged,
    SendSecondCustomerCreatedMessage,
};

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    /// Name is required.
    #[error("Name is required")]
    NameRequired,

    /// Street is required.
    #[error("Street is required")]
    StreetRequired,

    /// Number is required.
    #[error("Number is required")]
    NumberRequired,

    /// Zip is required.
    #[error("Zip is required")]
    ZipRequired,

    /// City is required.
    #[error("City is required")]
    CityRequired,

    /// Address is mandatory to activate a customer.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,
}
