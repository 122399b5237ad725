//! Dispatch error types.

use thiserror::Error;

use crate::handler::HandlerError;

/// Errors that can occur during event notification.
///
/// The dispatcher does not wrap or translate handler failures beyond
/// attaching the handler name and the event-type name; the underlying
/// error is carried as the source.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A single handler failed while processing an event.
    #[error("handler {handler} failed while processing {event_type}: {source}")]
    HandlerFailed {
        handler: &'static str,
        event_type: &'static str,
        #[source]
        source: HandlerError,
    },

    /// Several handlers failed during one fan-out pass.
    ///
    /// Only produced under [`FailurePolicy::Isolate`](crate::FailurePolicy),
    /// which runs the full fan-out before reporting.
    #[error("{} of {total} handlers failed while processing {event_type}", .failures.len())]
    MultipleFailures {
        event_type: &'static str,
        total: usize,
        failures: Vec<DispatchError>,
    },
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
