//! The outbound event contract: a sink for topic/payload notifications.
//!
//! The tracker publishes every breakpoint change twice: once on the generic
//! [`BREAKPOINT_TOPIC`] and once on a topic keyed by the new breakpoint's
//! name. Both carry the same [`BreakpointChange`] payload. How the events
//! reach subscribers is the host application's concern; the tracker only
//! needs something implementing [`BreakpointEmitter`].

use std::rc::Rc;

/// Topic of the generic change notification.
pub const BREAKPOINT_TOPIC: &str = "breakpoint";

/// Build the name-keyed topic for a breakpoint name, e.g. `breakpoint.md`.
pub fn specific_topic(name: &str) -> String {
    format!("{BREAKPOINT_TOPIC}.{name}")
}

/// Payload published when the active breakpoint changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointChange {
    /// Name of the breakpoint the viewport moved into, or `None` when the
    /// viewport is now narrower than every configured breakpoint.
    pub current: Option<String>,
    /// Name that was active before this change, or `None` when nothing was
    /// (before the first measurement, or below every band).
    pub previous: Option<String>,
}

impl BreakpointChange {
    /// Topic of the generic notification; always [`BREAKPOINT_TOPIC`].
    pub const fn topic(&self) -> &'static str {
        BREAKPOINT_TOPIC
    }

    /// Topic of the name-keyed notification, or `None` when this change
    /// cleared the active breakpoint and there is no name to key it with.
    pub fn specific_topic(&self) -> Option<String> {
        self.current.as_deref().map(specific_topic)
    }
}

/// Sink for breakpoint change notifications.
///
/// Implementations publish synchronously and must not fail; delivery
/// semantics beyond that are theirs to define. Any
/// `Fn(&str, &BreakpointChange)` closure is already an emitter, so wiring
/// up a real event bus or a recording stub is a one-liner:
///
/// ```
/// use viewport_breakpoints::{BreakpointChange, BreakpointEmitter};
///
/// let log = |topic: &str, change: &BreakpointChange| {
///     println!("{topic}: {:?} -> {:?}", change.previous, change.current);
/// };
/// log.emit("breakpoint", &BreakpointChange { current: Some("md".into()), previous: None });
/// ```
pub trait BreakpointEmitter {
    /// Publish `change` on `topic`.
    fn emit(&self, topic: &str, change: &BreakpointChange);
}

impl<F: Fn(&str, &BreakpointChange)> BreakpointEmitter for F {
    fn emit(&self, topic: &str, change: &BreakpointChange) {
        self(topic, change)
    }
}

impl<E: BreakpointEmitter + ?Sized> BreakpointEmitter for Rc<E> {
    fn emit(&self, topic: &str, change: &BreakpointChange) {
        (**self).emit(topic, change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_topic_is_keyed_by_name() {
        assert_eq!(specific_topic("md"), "breakpoint.md");
    }

    #[test]
    fn test_change_topics() {
        let change = BreakpointChange {
            current: Some("lg".to_string()),
            previous: Some("md".to_string()),
        };
        assert_eq!(change.topic(), "breakpoint");
        assert_eq!(change.specific_topic().as_deref(), Some("breakpoint.lg"));

        let cleared = BreakpointChange {
            current: None,
            previous: Some("sm".to_string()),
        };
        assert_eq!(cleared.specific_topic(), None);
    }
}
