//! The stateful tracker: resize-driven change detection plus the width
//! predicates.
//!
//! A [`BreakpointTracker`] owns a [`Breakpoints`] table, watches an injected
//! [`Viewport`] for resize notifications, and publishes a pair of
//! notifications through an injected [`BreakpointEmitter`] whenever the
//! active breakpoint changes. Predicates consult the table against the live
//! viewport width and never touch the change-detection state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::breakpoints::{Breakpoints, UnknownBreakpoint};
use crate::emitter::{BreakpointChange, BreakpointEmitter};
use crate::viewport::{ResizeListenerId, Viewport};

/// State shared between the tracker handle and its registered resize
/// listener.
struct TrackerState {
    breakpoints: Breakpoints,
    current: Option<String>,
}

/// Tracks the active breakpoint of a [`Viewport`] and publishes changes.
///
/// ```
/// use viewport_breakpoints::{
///     BreakpointChange, Breakpoints, BreakpointTracker, mock::MockViewport,
/// };
///
/// let viewport = MockViewport::with_width(500.0);
/// let emitter = |topic: &str, change: &BreakpointChange| {
///     println!("{topic}: now {:?}", change.current);
/// };
/// let breakpoints: Breakpoints =
///     [("sm", 0.0), ("md", 768.0), ("lg", 1024.0)].into_iter().collect();
///
/// let tracker = BreakpointTracker::new(breakpoints, viewport.clone(), emitter);
/// assert_eq!(tracker.current().as_deref(), Some("sm"));
/// assert!(tracker.up("sm").unwrap());
/// assert!(tracker.down("md").unwrap());
///
/// viewport.set_width(800.0); // prints "breakpoint: now Some("md")" twice
/// assert_eq!(tracker.current().as_deref(), Some("md"));
/// ```
///
/// Each tracker is an independent instance with its own table and its own
/// listener registration; nothing is process-wide. Registration is
/// single-slot: re-initializing via [`set_breakpoints`] replaces the
/// listener instead of stacking a second one.
///
/// [`set_breakpoints`]: BreakpointTracker::set_breakpoints
pub struct BreakpointTracker<V: Viewport, E: BreakpointEmitter> {
    state: Rc<RefCell<TrackerState>>,
    viewport: Rc<V>,
    emitter: Rc<E>,
    listener: Cell<Option<ResizeListenerId>>,
}

impl<V: Viewport + 'static, E: BreakpointEmitter + 'static> BreakpointTracker<V, E> {
    /// Build a tracker over `viewport`, register its resize listener, and
    /// run one immediate pass so [`current`](Self::current) reflects the
    /// viewport without waiting for a resize event. When a breakpoint
    /// already qualifies, that initial pass publishes a change pair with
    /// `previous = None`.
    pub fn new(breakpoints: Breakpoints, viewport: V, emitter: E) -> BreakpointTracker<V, E> {
        let tracker = BreakpointTracker {
            state: Rc::new(RefCell::new(TrackerState {
                breakpoints,
                current: None,
            })),
            viewport: Rc::new(viewport),
            emitter: Rc::new(emitter),
            listener: Cell::new(None),
        };
        tracker.listen();
        resize_pass(&tracker.state, &*tracker.viewport, &*tracker.emitter);
        tracker
    }

    /// Replace the breakpoint table wholesale and run an immediate pass
    /// against it. Names absent from the new table become unknown to the
    /// predicates from this point on.
    ///
    /// Also (re)registers the resize listener, replacing any existing
    /// registration, so listening resumes after [`unlisten`](Self::unlisten)
    /// and repeated calls never stack duplicate listeners.
    pub fn set_breakpoints(&self, breakpoints: Breakpoints) {
        self.state.borrow_mut().breakpoints = breakpoints;
        self.listen();
        resize_pass(&self.state, &*self.viewport, &*self.emitter);
    }

    fn listen(&self) {
        self.unlisten();
        let state = Rc::clone(&self.state);
        let viewport = Rc::clone(&self.viewport);
        let emitter = Rc::clone(&self.emitter);
        let id = self
            .viewport
            .add_resize_listener(Rc::new(move || resize_pass(&state, &*viewport, &*emitter)));
        self.listener.set(Some(id));
        debug!(listener = ?id, "listening for viewport resizes");
    }
}

impl<V: Viewport, E: BreakpointEmitter> BreakpointTracker<V, E> {
    /// The active breakpoint name, or `None` when the viewport is narrower
    /// than every configured breakpoint (or the table is empty).
    pub fn current(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    /// A copy of the configured breakpoint table.
    pub fn breakpoints(&self) -> Breakpoints {
        self.state.borrow().breakpoints.clone()
    }

    /// Whether a resize listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.listener.get().is_some()
    }

    /// True iff the viewport is at or above `key`'s min width. Inclusive at
    /// the boundary.
    pub fn up(&self, key: &str) -> Result<bool, UnknownBreakpoint> {
        let min_width = self.state.borrow().breakpoints.validate(key)?;
        Ok(self.viewport.width() >= min_width)
    }

    /// True iff the viewport is below `key`'s min width. Exclusive at the
    /// boundary: for any width and valid key, exactly one of
    /// [`up`](Self::up) and `down` holds.
    pub fn down(&self, key: &str) -> Result<bool, UnknownBreakpoint> {
        let min_width = self.state.borrow().breakpoints.validate(key)?;
        Ok(self.viewport.width() < min_width)
    }

    /// True iff the viewport falls between `from` and `to`:
    ///
    /// - `included == true`: from the start of `from`'s band through the end
    ///   of `to`'s band (exclusive of the breakpoint after `to`).
    /// - `included == false`: strictly interior, past `from`'s band and
    ///   before `to`'s band begins.
    ///
    /// `from` is expected at or below `to` in the mobile-first ordering;
    /// reversed arguments make the range empty and the predicate reports
    /// `Ok(false)`.
    pub fn between(&self, from: &str, to: &str, included: bool) -> Result<bool, UnknownBreakpoint> {
        let state = self.state.borrow();
        let from_width = state.breakpoints.validate(from)?;
        let to_width = state.breakpoints.validate(to)?;
        let (lower, upper) = if included {
            (from_width, state.breakpoints.next_above(to))
        } else {
            (state.breakpoints.next_above(from), to_width)
        };
        drop(state);
        let width = self.viewport.width();
        Ok(lower <= width && width < upper)
    }

    /// True iff the viewport falls inside exactly `key`'s band. Equivalent
    /// to `between(key, key, true)`.
    pub fn only(&self, key: &str) -> Result<bool, UnknownBreakpoint> {
        self.between(key, key, true)
    }

    /// Remove the resize registration. The table and active name persist;
    /// only notifications stop. No-op when already unlistened.
    /// [`set_breakpoints`](Self::set_breakpoints) starts listening again.
    pub fn unlisten(&self) {
        if let Some(id) = self.listener.take() {
            self.viewport.remove_resize_listener(id);
            debug!(listener = ?id, "stopped listening for viewport resizes");
        }
    }
}

impl<V: Viewport, E: BreakpointEmitter> Drop for BreakpointTracker<V, E> {
    fn drop(&mut self) {
        self.unlisten();
    }
}

/// One resize pass: resolve the active breakpoint for the current width
/// and, if it changed, publish the generic and name-keyed notifications.
///
/// The new value is committed (and the state borrow released) before
/// anything is published, so emitter callbacks may query the tracker and
/// observe the post-change state.
fn resize_pass<V: Viewport, E: BreakpointEmitter>(
    state: &RefCell<TrackerState>,
    viewport: &V,
    emitter: &E,
) {
    let width = viewport.width();
    let change = {
        let mut state = state.borrow_mut();
        let current = state.breakpoints.resolve(width).map(str::to_string);
        if current == state.current {
            return;
        }
        let previous = std::mem::replace(&mut state.current, current.clone());
        BreakpointChange { current, previous }
    };
    debug!(
        width,
        current = ?change.current,
        previous = ?change.previous,
        "active breakpoint changed"
    );
    emitter.emit(change.topic(), &change);
    if let Some(topic) = change.specific_topic() {
        emitter.emit(&topic, &change);
    }
}
