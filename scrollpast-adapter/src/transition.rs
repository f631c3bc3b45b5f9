use scrollpast::Easing;

/// A timed offset transition for snap animations.
///
/// This is the adapter-side transition runner: completion is purely
/// time-based (`is_done` compares against the duration; it does not know
/// whether the underlying renderer actually finished). Hosts with a native
/// transition facility (e.g. CSS) can apply the target directly and use the
/// same clock for completion; headless hosts sample intermediate offsets
/// each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedTransition {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TimedTransition {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// The eased offset at `now_ms`, clamped to the transition's span.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t) as f64;
        self.from + (self.to - self.from) * eased
    }

    /// Redirects an in-flight transition toward a new target, starting from
    /// the currently sampled offset.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}
