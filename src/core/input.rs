//! Guest input vocabulary and the guest-side input queue.
//!
//! The display core never talks to a device model directly; it queues
//! axis/button/key events through the `GuestInput` trait and flushes
//! them in per-event batches. The types here are the shared vocabulary
//! between the host event handlers and that queue.

use bitflags::bitflags;

/// Hotkey scancodes, USB HID usage ids (keyboard page).
pub mod scancode {
    pub const F: u32 = 0x09;
    pub const G: u32 = 0x0a;
    pub const U: u32 = 0x18;
    pub const DIGIT_1: u32 = 0x1e;
    pub const DIGIT_2: u32 = 0x1f;
    pub const DIGIT_9: u32 = 0x26;
}

bitflags! {
    /// Host modifier keys currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u32 {
        const LSHIFT = 1 << 0;
        const RSHIFT = 1 << 1;
        const LCTRL  = 1 << 2;
        const RCTRL  = 1 << 3;
        const LALT   = 1 << 4;
        const RALT   = 1 << 5;
        const LGUI   = 1 << 6;
        const RGUI   = 1 << 7;
    }
}

bitflags! {
    /// Host pointer button state as one mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u32 {
        const LEFT   = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT  = 1 << 2;
        const SIDE   = 1 << 3;
        const EXTRA  = 1 << 4;
    }
}

/// Pointer axes as the guest input queue understands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAxis {
    X,
    Y,
}

/// Canonical guest button identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputButton {
    Left,
    Middle,
    Right,
    Side,
    Extra,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

/// Fixed host-bit to guest-button mapping. Bits outside this table are
/// ignored when diffing button masks.
pub const BUTTON_MAP: [(MouseButtons, InputButton); 5] = [
    (MouseButtons::LEFT, InputButton::Left),
    (MouseButtons::MIDDLE, InputButton::Middle),
    (MouseButtons::RIGHT, InputButton::Right),
    (MouseButtons::SIDE, InputButton::Side),
    (MouseButtons::EXTRA, InputButton::Extra),
];

// ============================================================================
// Hotkey Actions
// ============================================================================

/// Actions bound to the grab-modifier hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle visibility of one output. Digits 2-9 address outputs 1-8;
    /// output 0 cannot be toggled this way.
    ToggleVisibility(usize),
    /// Toggle fullscreen on the output that received the key.
    ToggleFullscreen,
    /// Toggle the input grab.
    ToggleGrab,
    /// Resize the window back to the guest surface size.
    ForceResize,
}

impl HotkeyAction {
    /// Decode a hotkey scancode, if it is one.
    pub fn from_scancode(code: u32) -> Option<Self> {
        match code {
            scancode::DIGIT_2..=scancode::DIGIT_9 => {
                Some(Self::ToggleVisibility((code - scancode::DIGIT_1) as usize))
            }
            scancode::F => Some(Self::ToggleFullscreen),
            scancode::G => Some(Self::ToggleGrab),
            scancode::U => Some(Self::ForceResize),
            _ => None,
        }
    }
}

// ============================================================================
// Guest Input Queue
// ============================================================================

/// Guest-side input queue.
///
/// Implementations deliver the queued events to the machine's input
/// layer. Events between two `flush` calls form one atomic batch; the
/// core always ends a handled host event with a flush.
pub trait GuestInput: Send + Sync {
    /// True when the console's active pointer device reports absolute
    /// coordinates (tablet-style) rather than deltas.
    fn is_absolute(&self, console: usize) -> bool;

    /// Queue an absolute axis position in `[min, max)`.
    fn queue_absolute(&self, console: usize, axis: InputAxis, value: i32, min: i32, max: i32);

    /// Queue a relative axis delta.
    fn queue_relative(&self, console: usize, axis: InputAxis, delta: i32);

    /// Queue a button transition.
    fn queue_button(&self, console: usize, button: InputButton, pressed: bool);

    /// Queue a key transition (USB HID scancode, untranslated).
    fn queue_key(&self, console: usize, scancode: u32, pressed: bool);

    /// Flush the queued events to the guest atomically.
    fn flush(&self);
}
