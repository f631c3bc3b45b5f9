/// The edge the controlled element is anchored to.
///
/// The anchor determines the sign of the hide translation: a top-anchored
/// element slides up and off-screen, a bottom-anchored one slides down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
}

impl Anchor {
    /// Sign applied to the hidden extent when producing a translation offset.
    pub fn sign(self) -> f64 {
        match self {
            Self::Top => -1.0,
            Self::Bottom => 1.0,
        }
    }
}

/// CSS-named easing curves for snap transitions.
///
/// The polynomial approximations here are close enough for the short
/// (hundreds of milliseconds) transitions this engine drives; hosts with a
/// native transition facility can map the variant to the equivalent CSS
/// keyword instead of sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => t * t * (3.0 - 2.0 * t),
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }

    /// Parses a CSS easing keyword (`ease`, `linear`, `ease-in`, ...).
    pub fn from_css(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    /// The CSS keyword for this curve.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// A single reading of the scroll environment.
///
/// One sample carries everything the controller consumes from the outside:
/// the viewport's scroll position and geometry plus the controlled element's
/// current extent. Adapters build one per scroll event / tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSample {
    pub scroll_position: f64,
    pub viewport_height: f64,
    pub content_height: f64,
    pub element_height: f64,
}

impl ViewportSample {
    /// Maximum reachable scroll position (never negative).
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// A requested visual change, to be coalesced by a frame scheduler and
/// applied to the real element as a translation along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualUpdate {
    /// Signed translation in pixels (`anchor sign × el_height × (1 − visibility)`).
    pub offset: f64,
    /// The visibility this offset corresponds to, in `[0, 1]`.
    pub visibility: f64,
    /// Whether the host should apply this change with a timed transition.
    pub animate: bool,
}

impl VisualUpdate {
    /// The identity transform (element fully shown, no animation).
    pub fn cleared() -> Self {
        Self {
            offset: 0.0,
            visibility: 1.0,
            animate: false,
        }
    }
}
