//! Host event vocabulary.
//!
//! The window backend translates its toolkit's events into these; the
//! dispatcher drains them once per refresh tick.

use crate::core::backend::WindowId;
use crate::core::input::MouseButtons;

/// One pending host event.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Key pressed (USB HID scancode).
    KeyDown {
        window: WindowId,
        scancode: u32,
        repeat: bool,
    },
    /// Key released.
    KeyUp { window: WindowId, scancode: u32 },
    /// Composed text input (reaches text consoles only).
    TextInput { window: WindowId, text: String },
    /// Pointer moved. `x`/`y` are window-local, `dx`/`dy` the host's
    /// relative deltas, `buttons` the full current mask.
    MouseMotion {
        window: WindowId,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
        buttons: MouseButtons,
    },
    /// Pointer button transition. `button` is the single affected bit;
    /// `buttons` is the host's view of the full mask, which may or may
    /// not already include the transition.
    MouseButton {
        window: WindowId,
        button: MouseButtons,
        pressed: bool,
        x: i32,
        y: i32,
        buttons: MouseButtons,
    },
    /// Wheel motion; positive `dy` scrolls up, negative `dx` left.
    Wheel { window: WindowId, dx: i32, dy: i32 },
    /// Window-level event.
    Window { window: WindowId, event: WindowEvent },
    /// Application-level quit request.
    Quit,
}

/// Window-level events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The host resized the window.
    Resized { width: u32, height: u32 },
    /// Contents were damaged and need a repaint.
    Exposed,
    FocusGained,
    FocusLost,
    /// The pointer entered the window.
    PointerEntered,
    Minimized,
    Restored,
    Shown,
    Hidden,
    CloseRequested,
}
