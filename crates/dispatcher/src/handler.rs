//! Handler trait consumed by the dispatcher.

use crate::event::Event;

/// Error produced by a failing handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A unit of side-effecting logic bound to one or more event-type names.
///
/// Handlers are registered against event-type names and invoked by
/// [`EventDispatcher::notify`](crate::EventDispatcher::notify) for every
/// event whose type matches a name they were registered under. A handler
/// may be registered under several names; it receives the general event
/// value and is free to ignore variants it was not written for.
pub trait EventHandler<E: Event>: Send + Sync {
    /// Returns the name of this handler, used in error and log output.
    fn name(&self) -> &'static str;

    /// Processes a single event.
    ///
    /// Handlers perform side effects only; the returned `Result` is the
    /// failure channel, not a value channel.
    fn handle(&self, event: &E) -> Result<(), HandlerError>;
}
