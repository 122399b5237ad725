//! End-to-end domain event tests: real handlers, real factories, one
//! dispatcher.

use std::sync::{Arc, Mutex};

use dispatcher::{EventDispatcher, EventHandler, HandlerError};
use domain::{
    Address, CustomerCreatedEvent, CustomerFactory, DomainEvent, Money, ProductCreatedEvent,
    SendEmailWhenProductIsCreated, SendFirstCustomerCreatedMessage,
    SendMessageWhenCustomerAddressChanged, SendSecondCustomerCreatedMessage,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Wraps a real handler and records every invocation by handler name.
struct Spy<H> {
    inner: H,
    invocations: Arc<Mutex<Vec<&'static str>>>,
}

impl<H> Spy<H> {
    fn new(inner: H, invocations: Arc<Mutex<Vec<&'static str>>>) -> Arc<Self> {
        Arc::new(Self { inner, invocations })
    }
}

impl<H: EventHandler<DomainEvent>> EventHandler<DomainEvent> for Spy<H> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        self.invocations.lock().unwrap().push(self.inner.name());
        self.inner.handle(event)
    }
}

fn invocation_log() -> Arc<Mutex<Vec<&'static str>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn register_an_event_handler() {
    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    let handler: Arc<dyn EventHandler<DomainEvent>> = Arc::new(SendEmailWhenProductIsCreated);

    dispatcher.register("ProductCreatedEvent", Arc::clone(&handler));

    let registered = dispatcher.handlers("ProductCreatedEvent").unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].name(), "SendEmailWhenProductIsCreated");
}

#[test]
fn unregister_an_event_handler() {
    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    let handler: Arc<dyn EventHandler<DomainEvent>> = Arc::new(SendEmailWhenProductIsCreated);

    dispatcher.register("ProductCreatedEvent", Arc::clone(&handler));
    dispatcher.unregister("ProductCreatedEvent", &handler);

    // The key survives with an empty sequence.
    let registered = dispatcher.handlers("ProductCreatedEvent").unwrap();
    assert!(registered.is_empty());
}

#[test]
fn unregister_all_event_handlers() {
    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    dispatcher.register("ProductCreatedEvent", Arc::new(SendEmailWhenProductIsCreated));
    dispatcher.register(
        "CustomerCreatedEvent",
        Arc::new(SendFirstCustomerCreatedMessage),
    );

    dispatcher.unregister_all();

    assert!(dispatcher.handlers("ProductCreatedEvent").is_none());
    assert!(dispatcher.handlers("CustomerCreatedEvent").is_none());
}

#[test]
fn notify_all_product_created_handlers() {
    init_tracing();

    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    let log = invocation_log();
    dispatcher.register(
        "ProductCreatedEvent",
        Spy::new(SendEmailWhenProductIsCreated, Arc::clone(&log)),
    );

    let event: DomainEvent =
        ProductCreatedEvent::new("Product 1", "Product 1 description", Money::from_cents(1000))
            .into();
    dispatcher.notify(&event).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["SendEmailWhenProductIsCreated"]);
}

#[test]
fn notify_sends_both_messages_on_customer_created() {
    init_tracing();

    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    let log = invocation_log();
    dispatcher.register(
        "CustomerCreatedEvent",
        Spy::new(SendFirstCustomerCreatedMessage, Arc::clone(&log)),
    );
    dispatcher.register(
        "CustomerCreatedEvent",
        Spy::new(SendSecondCustomerCreatedMessage, Arc::clone(&log)),
    );

    let customer = CustomerFactory::create("Gabriel").unwrap();
    let event: DomainEvent = CustomerCreatedEvent::new(&customer).into();
    dispatcher.notify(&event).unwrap();

    // Both handlers ran, in registration order.
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "SendFirstCustomerCreatedMessage",
            "SendSecondCustomerCreatedMessage"
        ]
    );
}

#[test]
fn notify_address_change_produced_by_the_entity() {
    init_tracing();

    let mut dispatcher = EventDispatcher::<DomainEvent>::new();
    let log = invocation_log();
    dispatcher.register(
        "CustomerAddressChangedEvent",
        Spy::new(SendMessageWhenCustomerAddressChanged, Arc::clone(&log)),
    );
    // Handlers under other names must not run.
    dispatcher.register(
        "CustomerCreatedEvent",
        Spy::new(SendFirstCustomerCreatedMessage, Arc::clone(&log)),
    );

    let mut customer = CustomerFactory::create("Gabriel").unwrap();
    let address = Address::new("Street 2", 2, "Zipcode 2", "City 2").unwrap();
    let event: DomainEvent = customer.change_address(address).into();
    dispatcher.notify(&event).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["SendMessageWhenCustomerAddressChanged"]
    );
}

#[test]
fn notify_without_subscribers_is_a_noop() {
    let dispatcher = EventDispatcher::<DomainEvent>::new();
    let event: DomainEvent =
        ProductCreatedEvent::new("Product 1", "Product 1 description", Money::from_cents(1000))
            .into();
    assert!(dispatcher.notify(&event).is_ok());
}
