use alloc::string::String;

use scrollpast::Anchor;

/// Computed overflow behavior of an element, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    /// Whether content can scroll inside the element.
    pub fn is_scrollable(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }

    /// Parses a CSS overflow keyword.
    pub fn from_css(name: &str) -> Option<Self> {
        match name {
            "visible" => Some(Self::Visible),
            "hidden" => Some(Self::Hidden),
            "scroll" => Some(Self::Scroll),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// A host-provided handle to an element in a layout tree.
///
/// Only the queries the adapter actually needs are required; the defaults
/// suit hosts without per-axis overflow or attribute support.
pub trait ElementNode: Sized {
    fn parent(&self) -> Option<Self>;

    /// Current rendered extent along the scroll axis, in pixels.
    fn height(&self) -> f64;

    /// Computed `overflow` of the element.
    fn overflow(&self) -> Overflow;

    /// Computed `overflow-y`; hosts with a single overflow value can keep
    /// the default.
    fn overflow_y(&self) -> Overflow {
        self.overflow()
    }

    /// Whether the element is positioned via a `bottom` offset (used to
    /// resolve [`Edge::Auto`]).
    fn anchored_to_bottom(&self) -> bool {
        false
    }

    /// A markup attribute, e.g. `data-appear-offset`.
    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Which edge the element hides toward; `Auto` is resolved from the
/// element's own positioning at attach time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
    #[default]
    Auto,
}

impl Edge {
    pub fn from_css(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Resolves the configured edge to a concrete anchor.
///
/// `Auto` picks Bottom when the element's CSS places it via a `bottom`
/// offset, Top otherwise.
pub fn resolve_edge<E: ElementNode>(edge: Edge, el: &E) -> Anchor {
    match edge {
        Edge::Top => Anchor::Top,
        Edge::Bottom => Anchor::Bottom,
        Edge::Auto => {
            if el.anchored_to_bottom() {
                Anchor::Bottom
            } else {
                Anchor::Top
            }
        }
    }
}
