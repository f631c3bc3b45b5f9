use scrollpast::{ControllerOptions, Easing};

use crate::element::{Edge, ElementNode};
use crate::viewport::ViewportMode;

/// Elements carrying this attribute auto-attach on environment ready.
pub const MARKER_ATTRIBUTE: &str = "data-scroll-past";

const ATTR_APPEAR_OFFSET: &str = "data-appear-offset";
const ATTR_EDGE: &str = "data-edge";
const ATTR_MULTIPLIER: &str = "data-multiplier";
const ATTR_SCROLL_TIMEOUT: &str = "data-scroll-timeout";
const ATTR_SCROLL_OFFSET_THRESHOLD: &str = "data-scroll-offset-threshold";
const ATTR_TRANSITION_DURATION: &str = "data-transition-duration";
const ATTR_TRANSITION_EASING: &str = "data-transition-easing";
const ATTR_VIEWPORT: &str = "data-viewport";

/// The full attach-time configuration surface: the core controller options
/// plus the adapter-resolved `edge` and `viewport` choices.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachOptions {
    pub edge: Edge,
    pub viewport: ViewportMode,
    pub controller: ControllerOptions,
}

impl AttachOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides fields from the element's markup attributes.
    ///
    /// Unparseable or non-finite numeric values leave the current field
    /// untouched, so misconfigured markup degrades to the defaults instead
    /// of pushing NaN into a transform.
    pub fn apply_attributes<E: ElementNode>(mut self, el: &E) -> Self {
        if let Some(v) = el.attribute(ATTR_APPEAR_OFFSET).and_then(|s| parse_f64(&s)) {
            self.controller.appear_offset = v;
        }
        if let Some(v) = el.attribute(ATTR_EDGE).and_then(|s| Edge::from_css(&s)) {
            self.edge = v;
        }
        if let Some(v) = el.attribute(ATTR_MULTIPLIER).and_then(|s| parse_f64(&s)) {
            self.controller.multiplier = v;
        }
        if let Some(v) = el.attribute(ATTR_SCROLL_TIMEOUT).and_then(|s| parse_u64(&s)) {
            self.controller.scroll_timeout_ms = v;
        }
        if let Some(v) = el
            .attribute(ATTR_SCROLL_OFFSET_THRESHOLD)
            .and_then(|s| parse_f64(&s))
        {
            self.controller.scroll_offset_threshold = v;
        }
        if let Some(v) = el
            .attribute(ATTR_TRANSITION_DURATION)
            .and_then(|s| parse_u64(&s))
        {
            self.controller.transition_duration_ms = v;
        }
        if let Some(v) = el
            .attribute(ATTR_TRANSITION_EASING)
            .and_then(|s| Easing::from_css(s.trim()))
        {
            self.controller.transition_easing = v;
        }
        if let Some(s) = el.attribute(ATTR_VIEWPORT) {
            self.viewport = match s.trim() {
                "window" => ViewportMode::Window,
                "closest" => ViewportMode::Closest,
                sel => ViewportMode::Selector(sel.into()),
            };
        }
        self
    }
}

/// Whether the element opted in via the marker attribute.
pub fn is_marked<E: ElementNode>(el: &E) -> bool {
    el.attribute(MARKER_ATTRIBUTE).is_some()
}

/// Reads the complete configuration from an element's markup, starting from
/// the defaults.
pub fn options_from_element<E: ElementNode>(el: &E) -> AttachOptions {
    AttachOptions::new().apply_attributes(el)
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_u64(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok()
}
