use alloc::string::String;

use crate::element::ElementNode;

/// The scrollable context being monitored.
///
/// `max_scroll` is derived as `content_height − height`; a viewport whose
/// content fits entirely reports zero and the controlled element stays
/// fully visible.
pub trait Viewport {
    fn scroll_position(&self) -> f64;
    fn height(&self) -> f64;
    fn content_height(&self) -> f64;
}

/// Which viewport to monitor for scrolling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportMode {
    /// The whole-page window.
    Window,
    /// The nearest scrollable ancestor, falling back to the window.
    #[default]
    Closest,
    /// An explicit target, looked up by the host (e.g. a CSS selector).
    Selector(String),
}

/// Result of viewport resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewportTarget<E> {
    Window,
    Element(E),
}

/// Resolves the viewport for `el` under the configured mode.
///
/// `Closest` walks the ancestor chain outward and picks the first element
/// whose computed overflow (or overflow-y) allows scrolling. `Selector`
/// consults the host's `select` lookup. Resolution never fails: both modes
/// degrade to the whole-page window.
pub fn resolve_viewport<E: ElementNode>(
    el: &E,
    mode: &ViewportMode,
    mut select: impl FnMut(&str) -> Option<E>,
) -> ViewportTarget<E> {
    match mode {
        ViewportMode::Window => ViewportTarget::Window,
        ViewportMode::Closest => {
            let mut cur = el.parent();
            while let Some(e) = cur {
                if e.overflow().is_scrollable() || e.overflow_y().is_scrollable() {
                    return ViewportTarget::Element(e);
                }
                cur = e.parent();
            }
            ViewportTarget::Window
        }
        ViewportMode::Selector(sel) => match select(sel) {
            Some(e) => ViewportTarget::Element(e),
            None => ViewportTarget::Window,
        },
    }
}
