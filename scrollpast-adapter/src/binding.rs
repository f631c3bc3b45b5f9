use alloc::vec::Vec;

use scrollpast::{ViewportSample, VisibilityController, VisualUpdate};

use crate::element::{ElementNode, resolve_edge};
use crate::markup::{AttachOptions, is_marked, options_from_element};
use crate::scheduler::{FrameScheduler, UpdateKey};
use crate::transition::TimedTransition;
use crate::viewport::Viewport;

/// Wires one controlled element to a viewport and a controller.
///
/// The host forwards its scroll events to [`notify_scroll`](Self::notify_scroll)
/// and calls [`tick`](Self::tick) once per frame; visual updates land in the
/// shared [`FrameScheduler`] keyed by this binding. Animated snaps are driven
/// through a [`TimedTransition`] so headless hosts get eased intermediate
/// offsets without a native transition facility.
#[derive(Clone, Debug)]
pub struct Binding<E: ElementNode, V: Viewport> {
    element: E,
    viewport: V,
    key: UpdateKey,
    controller: VisibilityController,
    transition: Option<TimedTransition>,
    last_offset: f64,
    disposed: bool,
}

impl<E: ElementNode, V: Viewport> Binding<E, V> {
    /// Binds to the element and viewport, resolving the configured edge,
    /// and performs the immediate initial computation so a pre-scrolled
    /// page starts in the geometrically correct state.
    pub fn attach(
        element: E,
        viewport: V,
        key: UpdateKey,
        options: AttachOptions,
        now_ms: u64,
        scheduler: &mut FrameScheduler,
    ) -> Self {
        let anchor = resolve_edge(options.edge, &element);
        let controller = VisibilityController::new(options.controller.with_anchor(anchor));
        let mut binding = Self {
            element,
            viewport,
            key,
            controller,
            transition: None,
            last_offset: 0.0,
            disposed: false,
        };
        binding.notify_scroll(now_ms, scheduler);
        binding
    }

    pub fn key(&self) -> UpdateKey {
        self.key
    }

    pub fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    fn sample(&self) -> ViewportSample {
        ViewportSample {
            scroll_position: self.viewport.scroll_position(),
            viewport_height: self.viewport.height(),
            content_height: self.viewport.content_height(),
            element_height: self.element.height(),
        }
    }

    fn push(&mut self, update: VisualUpdate, now_ms: u64, scheduler: &mut FrameScheduler) {
        if update.animate {
            let opts = *self.controller.options();
            self.transition = Some(TimedTransition::new(
                self.last_offset,
                update.offset,
                now_ms,
                opts.transition_duration_ms,
                opts.transition_easing,
            ));
        }
        self.last_offset = update.offset;
        scheduler.request_update(self.key, update);
    }

    /// Call on every scroll notification from the host.
    pub fn notify_scroll(&mut self, now_ms: u64, scheduler: &mut FrameScheduler) {
        if self.disposed {
            return;
        }
        let sample = self.sample();
        if let Some(update) = self.controller.on_scroll(sample, now_ms) {
            self.push(update, now_ms, scheduler);
        }
    }

    /// Call once per display frame.
    ///
    /// Advances the session/animation clocks and, while a snap transition is
    /// in flight, samples eased intermediate offsets into the scheduler.
    pub fn tick(&mut self, now_ms: u64, scheduler: &mut FrameScheduler) {
        if self.disposed {
            return;
        }
        // Sample before advancing the controller so the frame that starts a
        // snap keeps its animate-flagged update.
        if let Some(t) = self.transition {
            self.last_offset = t.sample(now_ms);
            scheduler.request_update(
                self.key,
                VisualUpdate {
                    offset: self.last_offset,
                    visibility: self.controller.visibility(),
                    animate: false,
                },
            );
            if t.is_done(now_ms) {
                self.transition = None;
            }
        }

        let sample = self.sample();
        if let Some(update) = self.controller.tick(sample, now_ms) {
            self.push(update, now_ms, scheduler);
        }
    }

    /// Imperative visibility control.
    pub fn set_visibility(
        &mut self,
        value: f64,
        animate: bool,
        now_ms: u64,
        scheduler: &mut FrameScheduler,
    ) {
        if self.disposed {
            return;
        }
        let pos = self.viewport.scroll_position();
        let update = self.controller.set_visibility(value, animate, pos, now_ms);
        self.push(update, now_ms, scheduler);
    }

    /// Unbinds: cancels pending work and queues the cleared transform.
    ///
    /// Idempotent; the host's side of the contract is to stop forwarding
    /// scroll events for this binding.
    pub fn dispose(&mut self, scheduler: &mut FrameScheduler) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.transition = None;
        self.controller.dispose();
        scheduler.request_update(self.key, VisualUpdate::cleared());
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Auto-attaches every element carrying the marker attribute, reading each
/// element's configuration from its markup.
///
/// `make_viewport` resolves the element's viewport (see
/// [`crate::resolve_viewport`] for the ancestor walk); keys are assigned
/// sequentially starting at `first_key`.
pub fn attach_marked<E: ElementNode, V: Viewport>(
    elements: impl IntoIterator<Item = E>,
    mut make_viewport: impl FnMut(&E, &AttachOptions) -> V,
    first_key: UpdateKey,
    now_ms: u64,
    scheduler: &mut FrameScheduler,
) -> Vec<Binding<E, V>> {
    let mut bindings = Vec::new();
    let mut key = first_key;
    for element in elements {
        if !is_marked(&element) {
            continue;
        }
        let options = options_from_element(&element);
        let viewport = make_viewport(&element, &options);
        bindings.push(Binding::attach(
            element, viewport, key, options, now_ms, scheduler,
        ));
        key += 1;
    }
    bindings
}
