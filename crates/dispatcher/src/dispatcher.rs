//! Registry and synchronous fan-out.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DispatchError, Result};
use crate::event::Event;
use crate::handler::EventHandler;

/// Policy applied when a handler fails during fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate the first handler failure immediately, skipping the
    /// remaining handlers in that fan-out pass.
    #[default]
    FailFast,

    /// Run every handler regardless of failures, then report all failures
    /// from the pass as one aggregated error.
    Isolate,
}

/// Maps event-type names to ordered sequences of handlers and performs
/// synchronous fan-out notification.
///
/// The dispatcher holds shared references ([`Arc`]) to handlers constructed
/// and owned elsewhere. Within a sequence, handlers keep registration order;
/// the same handler instance may be registered several times and is invoked
/// once per registration.
///
/// `notify` is a plain synchronous call: it blocks the caller until every
/// matched handler has run, in order, on the calling thread. There is no
/// internal locking; a dispatcher shared across threads must be guarded by
/// the caller.
pub struct EventDispatcher<E: Event> {
    registry: HashMap<String, Vec<Arc<dyn EventHandler<E>>>>,
    policy: FailurePolicy,
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> EventDispatcher<E> {
    /// Creates an empty dispatcher with the [`FailurePolicy::FailFast`]
    /// policy.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::FailFast)
    }

    /// Creates an empty dispatcher with the given failure policy.
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            registry: HashMap::new(),
            policy,
        }
    }

    /// Returns the failure policy of this dispatcher.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Registers a handler under an event-type name.
    ///
    /// Appends the handler to the sequence for `event_type`, creating the
    /// sequence if the name was never used before. Duplicate registrations
    /// are kept; each one results in one invocation per matching `notify`.
    /// Callers pass a non-empty name. Registration never fails.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler<E>>) {
        let event_type = event_type.into();
        tracing::debug!(%event_type, handler = handler.name(), "registering handler");
        self.registry.entry(event_type).or_default().push(handler);
    }

    /// Unregisters a handler from an event-type name.
    ///
    /// Removes the first occurrence of `handler`, compared by allocation
    /// identity rather than structural equality, from the sequence for
    /// `event_type`. The key itself stays in the registry, possibly with an
    /// empty sequence. Unknown names and handlers that were never
    /// registered are silent no-ops.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler<E>>) {
        let Some(handlers) = self.registry.get_mut(event_type) else {
            return;
        };
        if let Some(index) = handlers
            .iter()
            .position(|registered| same_handler(registered, handler))
        {
            tracing::debug!(event_type, handler = handler.name(), "unregistering handler");
            handlers.remove(index);
        }
    }

    /// Removes every key from the registry, reverting it to empty.
    ///
    /// After this call, lookups for any previously-registered event-type
    /// name report absent, not an empty sequence.
    pub fn unregister_all(&mut self) {
        self.registry.clear();
    }

    /// Notifies every handler registered for the event's type name.
    ///
    /// Handlers run synchronously, in registration order, on the calling
    /// thread. A name with no registry entry is a legitimate non-error
    /// outcome. Handler failures are governed by the dispatcher's
    /// [`FailurePolicy`].
    #[tracing::instrument(skip(self, event), fields(event_type = %event.event_type()))]
    pub fn notify(&self, event: &E) -> Result<()> {
        let event_type = event.event_type();
        let Some(handlers) = self.registry.get(event_type) else {
            tracing::debug!(event_type, "no handlers registered");
            return Ok(());
        };

        metrics::counter!("dispatcher_events_notified").increment(1);

        match self.policy {
            FailurePolicy::FailFast => {
                for handler in handlers {
                    invoke(handler.as_ref(), event, event_type)?;
                }
                Ok(())
            }
            FailurePolicy::Isolate => {
                let total = handlers.len();
                let mut failures = Vec::new();
                for handler in handlers {
                    if let Err(failure) = invoke(handler.as_ref(), event, event_type) {
                        failures.push(failure);
                    }
                }
                if failures.is_empty() {
                    Ok(())
                } else if failures.len() == 1 {
                    Err(failures.swap_remove(0))
                } else {
                    Err(DispatchError::MultipleFailures {
                        event_type,
                        total,
                        failures,
                    })
                }
            }
        }
    }

    /// Returns the handler sequence registered under `event_type`, if any.
    ///
    /// This is a read view for inspection and tests, not a mutation surface.
    pub fn handlers(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler<E>>]> {
        self.registry.get(event_type).map(Vec::as_slice)
    }

    /// Returns whether `event_type` has a registry entry (possibly empty).
    pub fn contains(&self, event_type: &str) -> bool {
        self.registry.contains_key(event_type)
    }

    /// Returns the number of handlers registered under `event_type`.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.registry.get(event_type).map_or(0, Vec::len)
    }

    /// Iterates over the event-type names currently in the registry.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }
}

/// Compares two handlers by the address of their shared allocation.
///
/// Thin-pointer comparison sidesteps the unreliable vtable component of fat
/// trait-object pointers.
fn same_handler<E: Event>(a: &Arc<dyn EventHandler<E>>, b: &Arc<dyn EventHandler<E>>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

fn invoke<E: Event>(handler: &dyn EventHandler<E>, event: &E, event_type: &'static str) -> Result<()> {
    handler
        .handle(event)
        .map_err(|source| DispatchError::HandlerFailed {
            handler: handler.name(),
            event_type,
            source,
        })?;
    metrics::counter!("dispatcher_handlers_invoked").increment(1);
    Ok(())
}
