//! In-process event dispatcher.
//!
//! This crate provides the core dispatch mechanism:
//! - [`Event`] trait for values that can be dispatched
//! - [`EventHandler`] trait for side-effecting subscribers
//! - [`EventDispatcher`], a registry mapping event-type names to ordered
//!   handler sequences with synchronous fan-out notification
//!
//! The dispatcher is deliberately synchronous and single-threaded: `notify`
//! runs every matched handler on the calling thread, in registration order,
//! before returning. Callers that share a dispatcher across threads must
//! provide their own synchronization.

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, FailurePolicy};
pub use error::{DispatchError, Result};
pub use event::Event;
pub use handler::{EventHandler, HandlerError};
