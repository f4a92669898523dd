//! Host windowing seam.
//!
//! `WindowBackend` is what a windowing toolkit adapter implements; the
//! core treats every call as infallible (a failing window system is
//! fatal at the adapter boundary, not here). `Presenter` is the
//! 2D-or-GL presentation capability selected once at init; the core
//! never branches on which variant it holds.

use crate::core::console::Console;
use crate::core::events::HostEvent;
use crate::core::input::KeyModifiers;

/// Identifier the window system hands out for each created window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

/// Host cursor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCursor {
    /// The normal system arrow.
    Default,
    /// The sprite last defined by the guest pointer device.
    Guest,
}

/// Cursor sprite defined by the guest pointer device.
///
/// Pixel data is carried opaquely; decoding it is the adapter's job.
#[derive(Debug, Clone)]
pub struct CursorSprite {
    pub width: u32,
    pub height: u32,
    pub hot_x: u32,
    pub hot_y: u32,
    /// ARGB pixels, row-major.
    pub data: Vec<u32>,
}

/// Pixel formats a presenter may be asked to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Xrgb8888,
    Argb8888,
}

// ============================================================================
// Window Backend
// ============================================================================

/// Host window system adapter.
///
/// One instance serves every output; per-window calls take the
/// `WindowId` returned by `create_window`.
pub trait WindowBackend: Send + Sync {
    /// Create the host window for a console. The console's hidden flag
    /// and surface size are honored; `fullscreen` and `gl` come from
    /// display state.
    fn create_window(&self, console: &Console, fullscreen: bool, gl: bool) -> WindowId;

    fn destroy_window(&self, window: WindowId);

    fn resize_window(&self, window: WindowId, width: u32, height: u32);

    fn show_window(&self, window: WindowId);

    fn hide_window(&self, window: WindowId);

    fn set_fullscreen(&self, window: WindowId, fullscreen: bool);

    /// Set the window caption.
    fn set_caption(&self, window: WindowId, title: &str);

    /// Current window size in pixels (not the guest surface size).
    fn window_size(&self, window: WindowId) -> (u32, u32);

    /// True while the window holds host input focus.
    fn has_focus(&self, window: WindowId) -> bool;

    /// Modifier keys currently held, regardless of focus.
    fn modifiers_held(&self) -> KeyModifiers;

    /// Host pointer position in window-local coordinates.
    fn pointer_position(&self, window: WindowId) -> (i32, i32);

    /// Move the host pointer inside the window.
    fn warp_pointer(&self, window: WindowId, x: i32, y: i32);

    fn set_cursor_visible(&self, visible: bool);

    fn set_cursor(&self, cursor: HostCursor);

    /// Store a guest-defined sprite for later `HostCursor::Guest` use.
    fn define_cursor(&self, sprite: &CursorSprite);

    /// Switch the host pointer into captured/relative delivery mode.
    fn set_relative_mode(&self, enabled: bool);

    /// Acquire or release the window system's input grab on a window.
    fn set_input_grab(&self, window: WindowId, grabbed: bool);

    /// Push the window's current contents to the screen.
    fn present(&self, window: WindowId);

    /// Pop one pending host event, if any. Never blocks.
    fn poll_event(&self) -> Option<HostEvent>;
}

// ============================================================================
// Presenter Capability
// ============================================================================

/// Presentation capability over one rendering flavor (software or GL).
///
/// Chosen once when the display is built; blit mechanics stay behind
/// the implementation.
pub trait Presenter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Repaint the console's window from its current surface.
    fn redraw(&self, console: &Console);

    /// The guest surface was replaced (size or format change); rebuild
    /// whatever per-surface resources the flavor keeps.
    fn switch_surface(&self, console: &Console);

    /// Whether this flavor can take the format directly.
    fn supports_format(&self, format: PixelFormat) -> bool;
}
