//! Input-grab state.

use crate::config::GrabModifier;
use crate::core::latch::Latch;

/// Grab state shared by every output.
///
/// Owned by `Display` and only ever mutated from the single poll
/// thread; the transition logic lives in `core::display::grab`.
#[derive(Debug, Clone)]
pub struct GrabState {
    /// Host input is currently captured for the guest.
    pub grabbed: bool,
    /// Grab state saved when entering fullscreen, consulted on exit.
    pub saved_grab: bool,
    /// Fullscreen active.
    pub fullscreen: bool,
    /// The guest pointer device is absolute, tracked through
    /// mode-change notifications.
    pub absolute_active: bool,
    /// Modifier combination arming the UI hotkeys.
    pub modifier: GrabModifier,
    /// Armed when a focus loss surrendered an active grab; the next
    /// focus gain consumes it and retakes the grab.
    pub pending_regrab: Latch,
}

impl GrabState {
    pub fn new(modifier: GrabModifier) -> Self {
        Self {
            grabbed: false,
            saved_grab: false,
            fullscreen: false,
            absolute_active: false,
            modifier,
            pending_regrab: Latch::default(),
        }
    }
}
