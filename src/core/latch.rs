//! One-shot latches.
//!
//! Two transient conditions in the display are "remember this until the
//! next matching event": the pending-regrab set by a focus loss, and the
//! per-output hotkey suppression armed on focus gain. Both are modeled
//! as an explicit two-state machine instead of a bare bool so the
//! consume-once contract is visible at the call site.

/// A one-shot two-state latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latch {
    #[default]
    Idle,
    Armed,
}

impl Latch {
    pub fn arm(&mut self) {
        *self = Latch::Armed;
    }

    pub fn reset(&mut self) {
        *self = Latch::Idle;
    }

    /// True while armed; does not change state.
    pub fn is_armed(&self) -> bool {
        matches!(self, Latch::Armed)
    }

    /// Returns true exactly once per arm, resetting to idle.
    pub fn consume(&mut self) -> bool {
        let armed = self.is_armed();
        *self = Latch::Idle;
        armed
    }
}
