use alloc::collections::BTreeMap;

use scrollpast::VisualUpdate;

/// Identifies one controlled element's pending visual slot.
pub type UpdateKey = u64;

/// Coalesces visual updates to one DOM/render write per element per frame.
///
/// Scroll events arrive far more often than display frames; writing the
/// transform on every event causes redundant reflows. Bindings enqueue
/// updates with [`request_update`](Self::request_update) (last writer wins
/// per key, values are replaced, never accumulated) and the host drains the
/// batch once per frame with [`run_frame`](Self::run_frame).
///
/// This is the injected replacement for a process-wide "pending frame"
/// singleton: each scheduler instance owns its own batch.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    pending: BTreeMap<UpdateKey, VisualUpdate>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the newest update for `key`, replacing any update already
    /// queued for the current frame.
    pub fn request_update(&mut self, key: UpdateKey, update: VisualUpdate) {
        self.pending.insert(key, update);
    }

    /// Number of elements with an update queued.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drains the batch, invoking `apply` exactly once per key in key order.
    pub fn run_frame(&mut self, mut apply: impl FnMut(UpdateKey, VisualUpdate)) {
        while let Some((key, update)) = self.pending.pop_first() {
            apply(key, update);
        }
    }

    /// Drops everything queued without applying it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
