//! The host viewport contract: a current-width reader plus a resize signal.
//!
//! The tracker never talks to a window system directly. Anything that can
//! report a width and deliver resize notifications can back it: a desktop
//! window, a web canvas, a terminal, or [`MockViewport`] in tests.
//!
//! [`MockViewport`]: crate::mock::MockViewport

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Callback invoked on every resize notification.
///
/// Carries no payload: handlers read the width back from the [`Viewport`]
/// they registered with, so the value they observe is always the current
/// one even when the host coalesces notifications.
pub type ResizeCallback = Rc<dyn Fn()>;

/// A stable identifier for a registered resize listener.
///
/// Ids are minted from a process-wide counter, so they are unique across
/// every viewport in the program and can be handed back to
/// [`Viewport::remove_resize_listener`] without ambiguity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeListenerId(u64);

impl ResizeListenerId {
    /// Mint a fresh id. Viewport implementations call this when handing out
    /// ids from [`Viewport::add_resize_listener`].
    pub fn next() -> ResizeListenerId {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        ResizeListenerId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The viewport a tracker observes.
///
/// # Contract
///
/// - [`width`](Viewport::width) returns the current viewport width in
///   logical pixels.
/// - [`add_resize_listener`](Viewport::add_resize_listener) registers a
///   callback to run synchronously, on the registering thread, whenever the
///   width may have changed. Hosts may deliver the same width twice in a
///   row; listeners tolerate that.
/// - [`remove_resize_listener`](Viewport::remove_resize_listener) with an id
///   that is not registered is a no-op.
pub trait Viewport {
    /// Current viewport width in logical pixels.
    fn width(&self) -> f64;

    /// Register `callback` to be invoked on every resize notification.
    fn add_resize_listener(&self, callback: ResizeCallback) -> ResizeListenerId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn remove_resize_listener(&self, id: ResizeListenerId);
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn add_resize_listener(&self, callback: ResizeCallback) -> ResizeListenerId {
        (**self).add_resize_listener(callback)
    }

    fn remove_resize_listener(&self, id: ResizeListenerId) {
        (**self).remove_resize_listener(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_ids_are_unique() {
        let a = ResizeListenerId::next();
        let b = ResizeListenerId::next();
        assert_ne!(a, b);
    }
}
