use crate::range::ScrollRange;
use crate::{ControllerOptions, ViewportSample, VisualUpdate, clamp01};

/// The visibility state machine.
///
/// This type is intentionally headless:
/// - It does not hold any UI objects or timers.
/// - Your adapter drives it by forwarding scroll notifications to
///   [`on_scroll`](Self::on_scroll) and advancing time with
///   [`tick`](Self::tick).
/// - Each call returns the [`VisualUpdate`] (if any) that should be handed
///   to a frame scheduler and applied to the real element.
///
/// Timer semantics: the session-end timeout and the transition-completion
/// callback of a host environment are modelled as deadlines compared against
/// the caller's `now_ms`. Overwriting a deadline on each notification is the
/// "clear + restart" of the original timer; only one of each can ever be
/// pending.
///
/// For viewport resolution, frame coalescing and timed transition helpers,
/// see the `scrollpast-adapter` crate.
#[derive(Clone, Debug)]
pub struct VisibilityController {
    options: ControllerOptions,
    visibility: f64,
    el_height: f64,
    max_scroll: f64,
    range: ScrollRange,
    session_active: bool,
    session_deadline_ms: Option<u64>,
    animation_ends_ms: Option<u64>,
    disposed: bool,
}

impl VisibilityController {
    /// Creates a controller in the fully-visible state.
    ///
    /// Attachment protocol: after construction, feed the current environment
    /// through [`on_scroll`](Self::on_scroll) once so the element starts in
    /// the geometrically correct state (this handles page loads that start
    /// pre-scrolled; a zero max-scroll leaves the element fully visible).
    pub fn new(options: ControllerOptions) -> Self {
        let options = options.normalized();
        spdebug!(
            appear_offset = options.appear_offset,
            multiplier = options.multiplier,
            scroll_timeout_ms = options.scroll_timeout_ms,
            "VisibilityController::new"
        );
        Self {
            options,
            visibility: 1.0,
            el_height: 0.0,
            max_scroll: 0.0,
            range: ScrollRange::anchored(0.0, 0.0, options.appear_offset, false),
            session_active: false,
            session_deadline_ms: None,
            animation_ends_ms: None,
            disposed: false,
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Current visibility in `[0, 1]` (1 = fully shown).
    pub fn visibility(&self) -> f64 {
        self.visibility
    }

    /// The current hysteresis band.
    pub fn scroll_range(&self) -> ScrollRange {
        self.range
    }

    /// Whether a snap transition is in flight. While true, scroll
    /// notifications are ignored: the animation owns the element's
    /// appearance until its deadline passes.
    pub fn is_animating(&self) -> bool {
        self.animation_ends_ms.is_some()
    }

    /// Whether a scroll session is open (first notification of a burst seen,
    /// session-end deadline not yet fired).
    pub fn session_active(&self) -> bool {
        self.session_active
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Scroll distance needed to fully traverse hide/show.
    fn travel(&self) -> f64 {
        self.el_height / self.options.multiplier
    }

    fn expire_animation(&mut self, now_ms: u64) {
        if let Some(ends) = self.animation_ends_ms {
            if now_ms >= ends {
                sptrace!(now_ms, "transition complete");
                self.animation_ends_ms = None;
            }
        }
    }

    /// Caches environment geometry for a new scroll session and rebuilds the
    /// band with the fresh element height, anchored at whichever edge of the
    /// old band matches the current visibility. This keeps visibility
    /// continuous across sessions even when a responsive layout resized the
    /// element in between.
    fn start_session(&mut self, sample: ViewportSample) {
        self.el_height = sample.element_height.max(0.0);
        self.max_scroll = sample.max_scroll();
        self.session_active = true;

        let appear = self.options.appear_offset;
        self.range = if self.visibility > 0.5 {
            ScrollRange::anchored(self.range.visible, self.travel(), appear, false)
        } else {
            ScrollRange::anchored(self.range.offset, self.travel(), appear, true)
        };
        sptrace!(
            el_height = self.el_height,
            max_scroll = self.max_scroll,
            "session start"
        );
    }

    /// Calculates visibility for a new scroll position, re-anchoring the
    /// band when the position exits it on either side.
    fn visibility_from_scroll(&mut self, pos: f64) -> f64 {
        let travel = self.travel();
        let appear = self.options.appear_offset;
        if pos < self.range.visible {
            self.range = ScrollRange::anchored(pos, travel, appear, false);
        } else if pos > self.range.offset {
            self.range = ScrollRange::anchored(pos, travel, appear, true);
        }

        self.range.visibility_at(pos, travel)
    }

    fn update_for(&self, animate: bool) -> VisualUpdate {
        VisualUpdate {
            offset: self.options.anchor.sign() * self.el_height * (1.0 - self.visibility),
            visibility: self.visibility,
            animate,
        }
    }

    /// Core event handler; call on every scroll notification from the
    /// viewport.
    ///
    /// Returns the visual update to apply, or `None` when the notification
    /// is ignored (animating, disposed) or suppressed (pinned visible below
    /// the scroll-offset threshold).
    pub fn on_scroll(&mut self, sample: ViewportSample, now_ms: u64) -> Option<VisualUpdate> {
        if self.disposed {
            return None;
        }
        self.expire_animation(now_ms);
        if self.is_animating() {
            return None;
        }

        if !self.session_active {
            self.start_session(sample);
        }

        let pos = sample.scroll_position.clamp(0.0, self.max_scroll);

        // Pinned near the top of content: no recompute, no deadline reset.
        let threshold = self.options.scroll_offset_threshold;
        if self.el_height <= threshold && pos <= threshold {
            sptrace!(pos, threshold, "suppressed below threshold");
            return None;
        }

        let old_visibility = self.visibility;
        self.visibility = self.visibility_from_scroll(pos);

        // A full flip in a single event means the viewport jumped (iOS
        // momentum, pre-scrolled page load); smooth it out mid-session.
        let jumped = (self.visibility == 0.0 && old_visibility == 1.0)
            || (self.visibility == 1.0 && old_visibility == 0.0);

        self.session_deadline_ms = Some(now_ms + self.options.scroll_timeout_ms);
        sptrace!(pos, visibility = self.visibility, jumped, "on_scroll");

        if jumped {
            Some(self.set_visibility(self.visibility, true, pos, now_ms))
        } else {
            Some(self.update_for(false))
        }
    }

    /// Advances the controller's clock: expires a finished transition and
    /// fires the session-end deadline.
    ///
    /// When a session ends mid-transition (visibility strictly between 0
    /// and 1), the returned update snaps to the nearer terminal value with
    /// an animated transition; ties at exactly 0.5 snap to hidden.
    pub fn tick(&mut self, sample: ViewportSample, now_ms: u64) -> Option<VisualUpdate> {
        if self.disposed {
            return None;
        }
        self.expire_animation(now_ms);

        let deadline = self.session_deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        self.session_deadline_ms = None;
        self.session_active = false;
        self.end_session(sample, now_ms)
    }

    fn end_session(&mut self, sample: ViewportSample, now_ms: u64) -> Option<VisualUpdate> {
        let is_visible = self.visibility > 0.5;
        let needs_snap = self.visibility > 0.0 && self.visibility < 1.0;

        // Re-center the band around where the user stopped.
        let pos = sample.scroll_position.clamp(0.0, self.max_scroll);
        self.range = ScrollRange::anchored(
            pos,
            self.travel(),
            self.options.appear_offset,
            !is_visible,
        );
        spdebug!(pos, visibility = self.visibility, needs_snap, "session end");

        if needs_snap {
            let target = if is_visible { 1.0 } else { 0.0 };
            Some(self.set_visibility(target, true, pos, now_ms))
        } else {
            None
        }
    }

    /// Sets the desired visibility, with or without animation.
    ///
    /// The target is validated against the current scroll position: the
    /// element cannot claim to be more hidden than the position allows (that
    /// would open a gap at the top of content), so unreachable targets are
    /// silently clamped.
    pub fn set_visibility(
        &mut self,
        target: f64,
        animate: bool,
        scroll_position: f64,
        now_ms: u64,
    ) -> VisualUpdate {
        let mut target = clamp01(target);

        let travel = self.travel();
        let pos = scroll_position.max(0.0);
        if (1.0 - target) * travel > pos && travel > 0.0 {
            target = 1.0 - pos / travel;
        }

        self.visibility = clamp01(target);
        if animate {
            self.animation_ends_ms = Some(now_ms + self.options.transition_duration_ms);
        }
        sptrace!(visibility = self.visibility, animate, "set_visibility");
        self.update_for(animate)
    }

    /// Cancels pending deadlines and marks the controller disposed.
    ///
    /// Safe to call twice; all subsequent operations are no-ops. The caller
    /// clears the element transform (see [`VisualUpdate::cleared`]) and
    /// unsubscribes from the viewport.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.session_active = false;
        self.session_deadline_ms = None;
        self.animation_ends_ms = None;
        spdebug!("disposed");
    }
}
