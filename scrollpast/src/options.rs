use crate::{Anchor, Easing};

/// Configuration for [`crate::VisibilityController`].
///
/// Immutable per controller instance. All numeric fields are coerced to
/// their defaults by [`ControllerOptions::normalized`] when they are
/// non-finite or outside their domain, so bad configuration can never push
/// NaN into a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Extra scroll distance the element stays hidden after fully hiding,
    /// before reverse scrolling may start revealing it again. `>= 0`.
    pub appear_offset: f64,
    /// Ratio of element travel to scroll travel. `> 1` makes the element
    /// finish its hide/show motion over a shorter scroll distance. `> 0`.
    pub multiplier: f64,
    /// Milliseconds of scroll inactivity that end a session.
    pub scroll_timeout_ms: u64,
    /// Scroll position at or below which updates are suppressed, keeping the
    /// element pinned visible near the top of content. Only active while the
    /// element's height is `<=` this threshold. `>= 0`.
    pub scroll_offset_threshold: f64,
    /// Which edge the element is anchored to (sign of the translation).
    pub anchor: Anchor,
    /// Duration of snap transitions, in milliseconds.
    pub transition_duration_ms: u64,
    /// Easing curve for snap transitions.
    pub transition_easing: Easing,
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self {
            appear_offset: 0.0,
            multiplier: 1.0,
            scroll_timeout_ms: 500,
            scroll_offset_threshold: 0.0,
            anchor: Anchor::Top,
            transition_duration_ms: 300,
            transition_easing: Easing::Ease,
        }
    }

    pub fn with_appear_offset(mut self, appear_offset: f64) -> Self {
        self.appear_offset = appear_offset;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_scroll_timeout_ms(mut self, scroll_timeout_ms: u64) -> Self {
        self.scroll_timeout_ms = scroll_timeout_ms;
        self
    }

    pub fn with_scroll_offset_threshold(mut self, scroll_offset_threshold: f64) -> Self {
        self.scroll_offset_threshold = scroll_offset_threshold;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_transition_duration_ms(mut self, transition_duration_ms: u64) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub fn with_transition_easing(mut self, transition_easing: Easing) -> Self {
        self.transition_easing = transition_easing;
        self
    }

    /// Replaces out-of-domain numeric fields with their defaults.
    ///
    /// `VisibilityController::new` applies this, so a controller's options
    /// always satisfy `appear_offset >= 0`, `multiplier > 0` and
    /// `scroll_offset_threshold >= 0` with all three finite.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::new();
        if !self.appear_offset.is_finite() || self.appear_offset < 0.0 {
            spwarn!(
                appear_offset = self.appear_offset,
                "invalid appear_offset, using default"
            );
            self.appear_offset = defaults.appear_offset;
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            spwarn!(
                multiplier = self.multiplier,
                "invalid multiplier, using default"
            );
            self.multiplier = defaults.multiplier;
        }
        if !self.scroll_offset_threshold.is_finite() || self.scroll_offset_threshold < 0.0 {
            spwarn!(
                scroll_offset_threshold = self.scroll_offset_threshold,
                "invalid scroll_offset_threshold, using default"
            );
            self.scroll_offset_threshold = defaults.scroll_offset_threshold;
        }
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::new()
    }
}
