//! Messaging handlers for product events.

use dispatcher::{EventHandler, HandlerError};

use crate::event::DomainEvent;

/// Sends a notification email when a product is created.
pub struct SendEmailWhenProductIsCreated;

impl EventHandler<DomainEvent> for SendEmailWhenProductIsCreated {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreated"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        if let DomainEvent::ProductCreated(created) = event {
            tracing::info!(
                product = %created.name,
                description = %created.description,
                price = %created.price,
                "sending email: product created"
            );
        }
        Ok(())
    }
}
