//! A headless scroll-driven visibility engine.
//!
//! For adapter-level utilities (viewport resolution, frame coalescing, timed
//! transitions, markup configuration), see the `scrollpast-adapter` crate.
//!
//! This crate focuses on the core state machine needed to hide and show a
//! fixed element while the user scrolls: a continuous visibility value in
//! `[0, 1]`, a hysteresis band ("scroll range") that prevents flicker from
//! direction reversals, scroll sessions bounded by inactivity timeouts, and
//! snap-to-end transitions when a session settles mid-way.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - scroll position and viewport/content geometry (as [`ViewportSample`]s)
//! - a monotonic clock in milliseconds (`now_ms`)
//! - application of the returned [`VisualUpdate`]s to the real element
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;
mod range;
mod types;


pub use controller::VisibilityController;
pub use options::ControllerOptions;
pub use range::{ScrollRange, clamp01};
pub use types::{Anchor, Easing, ViewportSample, VisualUpdate};
