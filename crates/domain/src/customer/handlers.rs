//! Messaging handlers for customer events.

use dispatcher::{EventHandler, HandlerError};

use crate::event::DomainEvent;

/// Sends the first message when a customer is created.
pub struct SendFirstCustomerCreatedMessage;

impl EventHandler<DomainEvent> for SendFirstCustomerCreatedMessage {
    fn name(&self) -> &'static str {
        "SendFirstCustomerCreatedMessage"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        if let DomainEvent::CustomerCreated(created) = event {
            tracing::info!(
                customer_id = %created.customer_id,
                name = %created.name,
                "this is the first message for CustomerCreatedEvent"
            );
        }
        Ok(())
    }
}

/// Sends the second message when a customer is created.
pub struct SendSecondCustomerCreatedMessage;

impl EventHandler<DomainEvent> for SendSecondCustomerCreatedMessage {
    fn name(&self) -> &'static str {
        "SendSecondCustomerCreatedMessage"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        if let DomainEvent::CustomerCreated(created) = event {
            tracing::info!(
                customer_id = %created.customer_id,
                name = %created.name,
                "this is the second message for CustomerCreatedEvent"
            );
        }
        Ok(())
    }
}

/// Announces the new street when a customer's address changes.
pub struct SendMessageWhenCustomerAddressChanged;

impl EventHandler<DomainEvent> for SendMessageWhenCustomerAddressChanged {
    fn name(&self) -> &'static str {
        "SendMessageWhenCustomerAddressChanged"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        if let DomainEvent::CustomerAddressChanged(changed) = event {
            tracing::info!(
                customer_id = %changed.customer_id,
                name = %changed.name,
                address = %changed.address,
                "customer address changed"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{Address, CustomerFactory};
    use crate::entity::Entity;
    use crate::event::{CustomerAddressChangedEvent, CustomerCreatedEvent, ProductCreatedEvent};
    use crate::money::Money;

    #[test]
    fn created_handlers_accept_their_event() {
        let customer = CustomerFactory::create("Gabriel").unwrap();
        let event: DomainEvent = CustomerCreatedEvent::new(&customer).into();

        assert!(SendFirstCustomerCreatedMessage.handle(&event).is_ok());
        assert!(SendSecondCustomerCreatedMessage.handle(&event).is_ok());
    }

    #[test]
    fn address_handler_ignores_other_variants() {
        let event: DomainEvent =
            ProductCreatedEvent::new("Product 1", "Product 1 description", Money::from_cents(1000))
                .into();
        assert!(SendMessageWhenCustomerAddressChanged.handle(&event).is_ok());
    }

    #[test]
    fn address_handler_accepts_address_changes() {
        let mut customer = CustomerFactory::create("Gabriel").unwrap();
        let address = Address::new("Street 2", 2, "Zipcode 2", "City 2").unwrap();
        let event: DomainEvent = customer.change_address(address).into();

        assert!(matches!(event, DomainEvent::CustomerAddressChanged(_)));
        assert!(SendMessageWhenCustomerAddressChanged.handle(&event).is_ok());
    }

    #[test]
    fn direct_event_construction() {
        let customer = CustomerFactory::create("Gabriel").unwrap();
        let address = Address::new("Street 2", 2, "Zipcode 2", "City 2").unwrap();
        let event = CustomerAddressChangedEvent::new(customer.id(), customer.name(), address);
        assert_eq!(event.name, "Gabriel");
    }
}
