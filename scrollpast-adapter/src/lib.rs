//! Adapter utilities for the `scrollpast` crate.
//!
//! The `scrollpast` crate is UI-agnostic and focuses on the core visibility
//! state machine. This crate provides small, framework-neutral helpers
//! commonly needed by adapters:
//!
//! - Viewport resolution (whole-page window, closest scrollable ancestor, or
//!   an explicit target)
//! - A frame scheduler that coalesces visual updates to one write per frame
//! - Timed transitions for snap animations (time-based, not event-based)
//! - Markup (attribute) configuration parsing with safe numeric fallbacks
//! - A [`Binding`] that wires an element, a viewport and a controller
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings): hosts implement [`ElementNode`] and [`Viewport`] over their
//! environment and forward scroll events and frame ticks.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod binding;
mod element;
mod markup;
mod scheduler;
mod transition;
mod viewport;

#[cfg(test)]
mod tests;

pub use binding::{Binding, attach_marked};
pub use element::{Edge, ElementNode, Overflow, resolve_edge};
pub use markup::{AttachOptions, MARKER_ATTRIBUTE, is_marked, options_from_element};
pub use scheduler::{FrameScheduler, UpdateKey};
pub use transition::TimedTransition;
pub use viewport::{Viewport, ViewportMode, ViewportTarget, resolve_viewport};
