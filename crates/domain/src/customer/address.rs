//! Address value object.

use serde::{Deserialize, Serialize};

use super::CustomerError;

/// A customer's postal address.
///
/// Immutable once constructed; changing a customer's address replaces the
/// whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let street = street.into();
        let zip = zip.into();
        let city = city.into();

        if street.trim().is_empty() {
            return Err(CustomerError::StreetRequired);
        }
        if number == 0 {
            return Err(CustomerError::NumberRequired);
        }
        if zip.trim().is_empty() {
            return Err(CustomerError::ZipRequired);
        }
        if city.trim().is_empty() {
            return Err(CustomerError::CityRequired);
        }

        Ok(Self {
            street,
            number,
            zip,
            city,
        })
    }

    /// Returns the street name.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the street number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the zip code.
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// Returns the city.
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} - {} {}", self.street, self.number, self.zip, self.city)
    }
}
