use crate::*;

use std::cell::Cell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use scrollpast::{Anchor, Easing, VisualUpdate};

#[derive(Clone)]
struct FakeElement {
    inner: Rc<ElementData>,
}

struct ElementData {
    parent: Option<FakeElement>,
    height: Cell<f64>,
    overflow: Overflow,
    overflow_y: Overflow,
    bottom: bool,
    attrs: Vec<(String, String)>,
}

impl FakeElement {
    fn new(height: f64) -> Self {
        Self {
            inner: Rc::new(ElementData {
                parent: None,
                height: Cell::new(height),
                overflow: Overflow::Visible,
                overflow_y: Overflow::Visible,
                bottom: false,
                attrs: Vec::new(),
            }),
        }
    }

    fn with_parent(self, parent: &FakeElement) -> Self {
        Self {
            inner: Rc::new(ElementData {
                parent: Some(parent.clone()),
                height: Cell::new(self.inner.height.get()),
                overflow: self.inner.overflow,
                overflow_y: self.inner.overflow_y,
                bottom: self.inner.bottom,
                attrs: self.inner.attrs.clone(),
            }),
        }
    }

    fn with_overflow(self, overflow: Overflow, overflow_y: Overflow) -> Self {
        Self {
            inner: Rc::new(ElementData {
                parent: self.inner.parent.clone(),
                height: Cell::new(self.inner.height.get()),
                overflow,
                overflow_y,
                bottom: self.inner.bottom,
                attrs: self.inner.attrs.clone(),
            }),
        }
    }

    fn with_bottom(self) -> Self {
        Self {
            inner: Rc::new(ElementData {
                parent: self.inner.parent.clone(),
                height: Cell::new(self.inner.height.get()),
                overflow: self.inner.overflow,
                overflow_y: self.inner.overflow_y,
                bottom: true,
                attrs: self.inner.attrs.clone(),
            }),
        }
    }

    fn with_attr(self, name: &str, value: &str) -> Self {
        let mut attrs = self.inner.attrs.clone();
        attrs.push((name.to_string(), value.to_string()));
        Self {
            inner: Rc::new(ElementData {
                parent: self.inner.parent.clone(),
                height: Cell::new(self.inner.height.get()),
                overflow: self.inner.overflow,
                overflow_y: self.inner.overflow_y,
                bottom: self.inner.bottom,
                attrs,
            }),
        }
    }
}

impl ElementNode for FakeElement {
    fn parent(&self) -> Option<Self> {
        self.inner.parent.clone()
    }

    fn height(&self) -> f64 {
        self.inner.height.get()
    }

    fn overflow(&self) -> Overflow {
        self.inner.overflow
    }

    fn overflow_y(&self) -> Overflow {
        self.inner.overflow_y
    }

    fn anchored_to_bottom(&self) -> bool {
        self.inner.bottom
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

#[derive(Clone)]
struct FakeViewport {
    pos: Rc<Cell<f64>>,
    height: f64,
    content_height: f64,
}

impl FakeViewport {
    fn new(content_height: f64) -> Self {
        Self {
            pos: Rc::new(Cell::new(0.0)),
            height: 600.0,
            content_height,
        }
    }

    fn scroll_to(&self, pos: f64) {
        self.pos.set(pos);
    }
}

impl Viewport for FakeViewport {
    fn scroll_position(&self) -> f64 {
        self.pos.get()
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }
}

fn drain(scheduler: &mut FrameScheduler) -> Vec<(UpdateKey, VisualUpdate)> {
    let mut out = Vec::new();
    scheduler.run_frame(|k, u| out.push((k, u)));
    out
}

#[track_caller]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn scheduler_coalesces_last_writer_per_key() {
    let mut s = FrameScheduler::new();
    s.request_update(7, VisualUpdate::cleared());
    s.request_update(
        7,
        VisualUpdate {
            offset: -30.0,
            visibility: 0.7,
            animate: false,
        },
    );
    s.request_update(2, VisualUpdate::cleared());
    assert_eq!(s.pending(), 2);

    let applied = drain(&mut s);
    assert_eq!(applied.len(), 2);
    // Key order, one write per key, newest value wins.
    assert_eq!(applied[0].0, 2);
    assert_eq!(applied[1].0, 7);
    assert_eq!(applied[1].1.offset, -30.0);
    assert_eq!(s.pending(), 0);
}

#[test]
fn closest_viewport_picks_first_scrollable_ancestor() {
    let scrollable = FakeElement::new(600.0).with_overflow(Overflow::Visible, Overflow::Auto);
    let middle = FakeElement::new(600.0).with_parent(&scrollable);
    let el = FakeElement::new(80.0).with_parent(&middle);

    match resolve_viewport(&el, &ViewportMode::Closest, |_| None) {
        ViewportTarget::Element(e) => assert!(Rc::ptr_eq(&e.inner, &scrollable.inner)),
        ViewportTarget::Window => panic!("expected the scrollable ancestor"),
    }
}

#[test]
fn closest_viewport_falls_back_to_window() {
    let root = FakeElement::new(600.0);
    let el = FakeElement::new(80.0).with_parent(&root);
    assert!(matches!(
        resolve_viewport(&el, &ViewportMode::Closest, |_| None),
        ViewportTarget::Window
    ));
}

#[test]
fn selector_viewport_degrades_to_window_on_miss() {
    let el = FakeElement::new(80.0);
    let target = FakeElement::new(600.0);
    let mode = ViewportMode::Selector("#main".into());

    let hit = resolve_viewport(&el, &mode, |sel| {
        (sel == "#main").then(|| target.clone())
    });
    assert!(matches!(hit, ViewportTarget::Element(_)));

    let miss = resolve_viewport(&el, &mode, |_| None);
    assert!(matches!(miss, ViewportTarget::Window));
}

#[test]
fn auto_edge_resolves_from_element_positioning() {
    let header = FakeElement::new(80.0);
    let footer = FakeElement::new(80.0).with_bottom();
    assert_eq!(resolve_edge(Edge::Auto, &header), Anchor::Top);
    assert_eq!(resolve_edge(Edge::Auto, &footer), Anchor::Bottom);
    assert_eq!(resolve_edge(Edge::Top, &footer), Anchor::Top);
}

#[test]
fn markup_overrides_defaults_and_ignores_garbage() {
    let el = FakeElement::new(80.0)
        .with_attr(MARKER_ATTRIBUTE, "")
        .with_attr("data-appear-offset", "40")
        .with_attr("data-multiplier", "fast")
        .with_attr("data-scroll-timeout", "250")
        .with_attr("data-transition-easing", "ease-in-out")
        .with_attr("data-viewport", "window");

    assert!(is_marked(&el));
    let opts = options_from_element(&el);
    assert_eq!(opts.controller.appear_offset, 40.0);
    // Unparseable multiplier keeps the default.
    assert_eq!(opts.controller.multiplier, 1.0);
    assert_eq!(opts.controller.scroll_timeout_ms, 250);
    assert_eq!(opts.controller.transition_easing, Easing::EaseInOut);
    assert_eq!(opts.viewport, ViewportMode::Window);
}

#[test]
fn markup_rejects_non_finite_numbers() {
    let el = FakeElement::new(80.0)
        .with_attr("data-appear-offset", "NaN")
        .with_attr("data-scroll-offset-threshold", "inf");
    let opts = options_from_element(&el);
    assert_eq!(opts.controller.appear_offset, 0.0);
    assert_eq!(opts.controller.scroll_offset_threshold, 0.0);
}

#[test]
fn timed_transition_samples_and_completes() {
    let mut t = TimedTransition::new(0.0, -100.0, 1000, 100, Easing::Linear);
    assert_eq!(t.sample(1000), 0.0);
    assert_eq!(t.sample(1050), -50.0);
    assert_eq!(t.sample(1100), -100.0);
    assert_eq!(t.sample(1500), -100.0);
    assert!(!t.is_done(1099));
    assert!(t.is_done(1100));

    t.retarget(1050, 0.0, 100);
    assert_eq!(t.from, -50.0);
    assert_eq!(t.sample(1150), 0.0);
}

#[test]
fn binding_applies_updates_through_the_scheduler() {
    let viewport = FakeViewport::new(5600.0);
    let el = FakeElement::new(100.0);
    let mut scheduler = FrameScheduler::new();

    let mut b = Binding::attach(
        el,
        viewport.clone(),
        1,
        AttachOptions::new(),
        0,
        &mut scheduler,
    );
    let applied = drain(&mut scheduler);
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].1.offset, 0.0);

    viewport.scroll_to(40.0);
    b.notify_scroll(16, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert_close(applied[0].1.offset, -40.0);
    assert_close(applied[0].1.visibility, 0.6);

    // Bursty events within one frame coalesce to a single write.
    viewport.scroll_to(60.0);
    b.notify_scroll(20, &mut scheduler);
    viewport.scroll_to(80.0);
    b.notify_scroll(24, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert_eq!(applied.len(), 1);
    assert_close(applied[0].1.offset, -80.0);
}

#[test]
fn binding_snap_drives_eased_intermediate_offsets() {
    let viewport = FakeViewport::new(5600.0);
    let el = FakeElement::new(100.0);
    let mut scheduler = FrameScheduler::new();

    let mut b = Binding::attach(
        el,
        viewport.clone(),
        1,
        AttachOptions::new(),
        0,
        &mut scheduler,
    );
    for (pos, now) in [(50.0, 10), (100.0, 20), (500.0, 30), (470.0, 40)] {
        viewport.scroll_to(pos);
        b.notify_scroll(now, &mut scheduler);
    }
    drain(&mut scheduler);
    assert_close(b.controller().visibility(), 0.3);

    // Idle past the session timeout: the snap lands with animate=true.
    b.tick(540, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert!(applied[0].1.animate);
    assert_close(applied[0].1.offset, -100.0);

    // Mid-flight frames carry eased offsets (default easing at t=0.5 is 0.5).
    b.tick(690, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert!(!applied[0].1.animate);
    assert_close(applied[0].1.offset, -85.0);

    // Past the duration the transition settles at the target and stops.
    b.tick(840, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert_close(applied[0].1.offset, -100.0);
    assert!(!b.controller().is_animating());

    b.tick(856, &mut scheduler);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn binding_dispose_clears_transform_and_is_idempotent() {
    let viewport = FakeViewport::new(5600.0);
    let el = FakeElement::new(100.0);
    let mut scheduler = FrameScheduler::new();

    let mut b = Binding::attach(
        el,
        viewport.clone(),
        1,
        AttachOptions::new(),
        0,
        &mut scheduler,
    );
    viewport.scroll_to(80.0);
    b.notify_scroll(16, &mut scheduler);
    drain(&mut scheduler);

    b.dispose(&mut scheduler);
    let applied = drain(&mut scheduler);
    assert_eq!(applied[0].1, VisualUpdate::cleared());

    b.dispose(&mut scheduler);
    assert_eq!(scheduler.pending(), 0);
    b.notify_scroll(32, &mut scheduler);
    assert_eq!(scheduler.pending(), 0);
    assert!(b.is_disposed());
}

#[test]
fn binding_with_flat_content_stays_visible() {
    // Content fits the viewport: max_scroll is 0 and the element stays put.
    let viewport = FakeViewport::new(600.0);
    viewport.scroll_to(300.0);
    let el = FakeElement::new(100.0);
    let mut scheduler = FrameScheduler::new();

    let b = Binding::attach(el, viewport, 1, AttachOptions::new(), 0, &mut scheduler);
    let applied = drain(&mut scheduler);
    assert_eq!(applied[0].1.visibility, 1.0);
    assert_eq!(applied[0].1.offset, 0.0);
    assert_eq!(b.controller().visibility(), 1.0);
}

#[test]
fn attach_marked_skips_unmarked_elements() {
    let marked_top = FakeElement::new(64.0).with_attr(MARKER_ATTRIBUTE, "");
    let unmarked = FakeElement::new(64.0);
    let marked_bottom = FakeElement::new(64.0)
        .with_attr(MARKER_ATTRIBUTE, "")
        .with_attr("data-edge", "bottom");

    let mut scheduler = FrameScheduler::new();
    let bindings = attach_marked(
        [marked_top, unmarked, marked_bottom],
        |_, _| FakeViewport::new(5600.0),
        10,
        0,
        &mut scheduler,
    );

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].key(), 10);
    assert_eq!(bindings[1].key(), 11);
    assert_eq!(bindings[0].controller().options().anchor, Anchor::Top);
    assert_eq!(bindings[1].controller().options().anchor, Anchor::Bottom);
    assert_eq!(scheduler.pending(), 2);
}
