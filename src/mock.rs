//! Mock viewport and emitter for headless testing.
//!
//! This module provides in-memory stand-ins for the two injected
//! capabilities so trackers can be exercised without a window system:
//! [`MockViewport`] plays the host environment and [`RecordingEmitter`]
//! captures everything a tracker publishes. Both are cheap shared handles
//! (cloning aliases the same state) and are public so downstream crates can
//! test their own wiring with them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::emitter::{BreakpointChange, BreakpointEmitter};
use crate::viewport::{ResizeCallback, ResizeListenerId, Viewport};

struct MockViewportInner {
    width: f64,
    listeners: Vec<(ResizeListenerId, ResizeCallback)>,
}

/// A scriptable [`Viewport`] with a settable width.
///
/// [`set_width`](MockViewport::set_width) fires every registered listener
/// synchronously, like a host delivering a resize notification. Setting the
/// same width again still fires them; hosts repeat widths, and trackers are
/// expected to stay silent when nothing changed.
#[derive(Clone)]
pub struct MockViewport {
    inner: Rc<RefCell<MockViewportInner>>,
}

impl MockViewport {
    /// Create a mock viewport at the given width, with no listeners.
    pub fn with_width(width: f64) -> MockViewport {
        MockViewport {
            inner: Rc::new(RefCell::new(MockViewportInner {
                width,
                listeners: Vec::new(),
            })),
        }
    }

    /// Resize the viewport and deliver a resize notification to every
    /// registered listener.
    pub fn set_width(&self, width: f64) {
        self.inner.borrow_mut().width = width;
        // Snapshot so listeners may register or remove listeners while
        // being notified.
        let listeners: Vec<ResizeCallback> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in listeners {
            callback();
        }
    }

    /// Number of currently registered listeners. Lets tests assert that
    /// re-initialization and teardown never leak registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Viewport for MockViewport {
    fn width(&self) -> f64 {
        self.inner.borrow().width
    }

    fn add_resize_listener(&self, callback: ResizeCallback) -> ResizeListenerId {
        let id = ResizeListenerId::next();
        self.inner.borrow_mut().listeners.push((id, callback));
        id
    }

    fn remove_resize_listener(&self, id: ResizeListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener, _)| *listener != id);
    }
}

/// A [`BreakpointEmitter`] that records every `(topic, change)` pair.
#[derive(Clone, Default)]
pub struct RecordingEmitter {
    events: Rc<RefCell<Vec<(String, BreakpointChange)>>>,
}

impl RecordingEmitter {
    /// Create an emitter with an empty event log.
    pub fn new() -> RecordingEmitter {
        RecordingEmitter::default()
    }

    /// Everything emitted so far, in publication order.
    pub fn events(&self) -> Vec<(String, BreakpointChange)> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl BreakpointEmitter for RecordingEmitter {
    fn emit(&self, topic: &str, change: &BreakpointChange) {
        self.events
            .borrow_mut()
            .push((topic.to_string(), change.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_width_notifies_listeners() {
        let viewport = MockViewport::with_width(100.0);
        let hits = Rc::new(RefCell::new(0));
        let id = viewport.add_resize_listener({
            let hits = Rc::clone(&hits);
            Rc::new(move || *hits.borrow_mut() += 1)
        });

        viewport.set_width(200.0);
        viewport.set_width(200.0);
        assert_eq!(*hits.borrow(), 2, "same-width notifications still fire");
        assert_eq!(viewport.width(), 200.0);

        viewport.remove_resize_listener(id);
        viewport.set_width(300.0);
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn test_remove_unknown_listener_is_a_noop() {
        let viewport = MockViewport::with_width(100.0);
        viewport.remove_resize_listener(ResizeListenerId::next());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_recording_emitter_keeps_order() {
        let emitter = RecordingEmitter::new();
        let change = BreakpointChange {
            current: Some("md".to_string()),
            previous: None,
        };
        emitter.emit("breakpoint", &change);
        emitter.emit("breakpoint.md", &change);

        let events = emitter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "breakpoint");
        assert_eq!(events[1].0, "breakpoint.md");

        emitter.clear();
        assert!(emitter.events().is_empty());
    }
}
