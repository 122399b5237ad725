//! Event trait consumed by the dispatcher.

use chrono::{DateTime, Utc};

/// Trait for events delivered through the dispatcher.
///
/// Events are immutable records of something that happened in the domain.
/// The dispatcher treats them opaquely; it only uses [`Event::event_type`]
/// to select the handler sequence to notify.
pub trait Event: Send + Sync {
    /// Returns the stable name identifying this event's variant.
    ///
    /// A given concrete variant must always return the same name; it is the
    /// registry lookup key.
    fn event_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
