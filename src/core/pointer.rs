//! Pointer translation state.

use crate::core::input::MouseButtons;

/// Guest-cursor tracking and button diff state, shared by all outputs.
///
/// While the guest tracks an absolute cursor position but the host
/// delivers relative motion, deltas are recomputed against
/// `guest_x`/`guest_y` instead of trusting the host's accelerated
/// values; see `Display::send_motion`.
#[derive(Debug, Clone)]
pub struct PointerState {
    /// The guest currently shows a cursor (position below is live).
    pub guest_cursor_visible: bool,
    /// Last guest-reported cursor position.
    pub guest_x: i32,
    pub guest_y: i32,
    /// Button mask observed by the previous motion/button batch.
    pub previous_buttons: MouseButtons,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            guest_cursor_visible: false,
            guest_x: 0,
            guest_y: 0,
            previous_buttons: MouseButtons::empty(),
        }
    }
}
