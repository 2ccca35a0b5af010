//! # viewport-breakpoints
//!
//! Tracks which named "breakpoint" (viewport-width bucket) the current
//! viewport falls into and notifies subscribers when the active breakpoint
//! changes. A thin, stateful wrapper over a viewport-width reader and a
//! resize signal, plus a handful of comparison predicates.
//!
//! ## Example
//! ```rust
//! use viewport_breakpoints::{
//!     BreakpointChange, Breakpoints, BreakpointTracker, mock::MockViewport,
//! };
//!
//! // sm owns [0, 768), md owns [768, 1024), lg owns [1024, ∞).
//! let breakpoints: Breakpoints =
//!     [("sm", 0.0), ("md", 768.0), ("lg", 1024.0)].into_iter().collect();
//!
//! let viewport = MockViewport::with_width(500.0);
//! let tracker = BreakpointTracker::new(
//!     breakpoints,
//!     viewport.clone(),
//!     |topic: &str, change: &BreakpointChange| {
//!         println!("{topic}: {:?} -> {:?}", change.previous, change.current);
//!     },
//! );
//!
//! assert_eq!(tracker.current().as_deref(), Some("sm"));
//! assert!(tracker.up("sm").unwrap());
//! assert!(tracker.down("md").unwrap());
//! assert!(tracker.only("sm").unwrap());
//! assert!(tracker.between("sm", "lg", true).unwrap());
//!
//! viewport.set_width(800.0);
//! assert_eq!(tracker.current().as_deref(), Some("md"));
//! ```
//!
//! This demonstrates the three pieces of the crate:
//!
//! - Configuration: a [`Breakpoints`] table maps each name to the width
//!   where its band starts. Bands are mobile-first: a breakpoint covers its
//!   min width up to the next breakpoint's min width, and the largest is
//!   unbounded above.
//! - Tracking: a [`BreakpointTracker`] observes a viewport, keeps the
//!   active breakpoint name up to date, and publishes a change pair (the
//!   generic `breakpoint` topic plus a `breakpoint.<name>` topic) whenever
//!   it moves to a different band.
//! - Predicates: [`up`](BreakpointTracker::up),
//!   [`down`](BreakpointTracker::down),
//!   [`between`](BreakpointTracker::between), and
//!   [`only`](BreakpointTracker::only) compare the live viewport width
//!   against the table; an unconfigured name gets an [`UnknownBreakpoint`]
//!   error.
//!
//! ## Injected environment
//!
//! The tracker never talks to a window system or an event bus directly.
//! The host supplies both as capabilities at construction: anything
//! implementing [`Viewport`] (a width reader plus a resize signal) and
//! anything implementing [`BreakpointEmitter`] (a topic/payload sink;
//! every `Fn(&str, &BreakpointChange)` closure qualifies). The [`mock`]
//! module has in-memory implementations of both for headless tests.
//!
//! Trackers are independent instances: each owns its table and its own
//! listener registration, so an application can run several side by side
//! and tests never share state.

pub mod breakpoints;
pub mod emitter;
pub mod mock;
pub mod tracker;
pub mod viewport;

pub use breakpoints::{Breakpoints, UnknownBreakpoint};
pub use emitter::{specific_topic, BreakpointChange, BreakpointEmitter, BREAKPOINT_TOPIC};
pub use tracker::BreakpointTracker;
pub use viewport::{ResizeCallback, ResizeListenerId, Viewport};
