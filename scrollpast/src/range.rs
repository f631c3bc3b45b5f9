/// Clamps to `[0, 1]`. NaN maps to `0.0` so a degenerate division upstream
/// can never leak NaN into a transform.
pub fn clamp01(v: f64) -> f64 {
    if !(v > 0.0) {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// The hysteresis band: an ordered triple of scroll positions within which
/// visibility is a deterministic function of position.
///
/// Invariants (maintained by [`ScrollRange::anchored`]):
/// - `0 ≤ visible ≤ hidden ≤ offset`
/// - `hidden = visible + travel` where `travel = el_height / multiplier`
/// - `offset = hidden + appear_offset`
///
/// While the scroll position stays inside `[visible, offset]` the band is
/// never recomputed; small back-and-forth scrolling maps to the same
/// visibility values and the element does not flicker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRange {
    /// At or below this position the element is fully visible.
    pub visible: f64,
    /// At or above this position the element is fully hidden.
    pub hidden: f64,
    /// `hidden` plus the appear-offset dead zone; past it the band re-anchors.
    pub offset: f64,
}

impl ScrollRange {
    /// Builds a band around `pos`.
    ///
    /// With `past_offset == false` the band starts fully visible at `pos`;
    /// otherwise `pos` sits at the far (offset) edge, i.e. the element is
    /// fully hidden with the dead zone already consumed. Either way the band
    /// width is exactly `travel + appear_offset`, clamped so `visible` never
    /// goes negative.
    pub fn anchored(pos: f64, travel: f64, appear_offset: f64, past_offset: bool) -> Self {
        let mut visible = pos;
        if past_offset {
            visible -= travel + appear_offset;
        }
        if visible < 0.0 {
            visible = 0.0;
        }

        let hidden = visible + travel;
        Self {
            visible,
            hidden,
            offset: hidden + appear_offset,
        }
    }

    /// Whether `pos` falls inside the band (inclusive on both edges).
    pub fn contains(&self, pos: f64) -> bool {
        self.visible <= pos && pos <= self.offset
    }

    /// Visibility for a position inside (or clamped to) the band.
    ///
    /// Monotonically non-increasing in `pos`; always lands in `[0, 1]`.
    pub fn visibility_at(&self, pos: f64, travel: f64) -> f64 {
        1.0 - clamp01((pos - self.visible) / travel)
    }
}
