//! In-process platform adapters.
//!
//! A deployment wires `Display` to a real windowing toolkit and to the
//! machine's input layer. The adapters here stand in for both sides:
//! the backend keeps windows as bookkeeping entries and takes host
//! events from an injectable queue, while the guest queue and machine
//! control log what reaches them. They drive the demo binary and show
//! what a native adapter must provide.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::backend::{CursorSprite, HostCursor, WindowBackend, WindowId};
use crate::core::console::Console;
use crate::core::events::HostEvent;
use crate::core::input::{GuestInput, InputAxis, InputButton, KeyModifiers};
use crate::core::vm::VmControl;
use crate::prelude::Mutex;

// ============================================================================
// Headless Window Backend
// ============================================================================

struct HeadlessState {
    next_id: u32,
    /// Window id to current size.
    windows: HashMap<u32, (u32, u32)>,
    events: VecDeque<HostEvent>,
    modifiers: KeyModifiers,
    pointer: (i32, i32),
}

/// Window backend with no window system behind it.
///
/// Windows exist as table entries, events arrive through `push_event`,
/// and every call is logged. Focus is always held.
pub struct HeadlessBackend {
    state: Mutex<HeadlessState>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HeadlessState {
                next_id: 1,
                windows: HashMap::new(),
                events: VecDeque::new(),
                modifiers: KeyModifiers::empty(),
                pointer: (320, 240),
            }),
        }
    }

    /// Inject a host event for a later poll.
    pub fn push_event(&self, event: HostEvent) {
        self.state.lock().unwrap().events.push_back(event);
    }

    /// Set the modifier state later polls report.
    pub fn set_modifiers(&self, modifiers: KeyModifiers) {
        self.state.lock().unwrap().modifiers = modifiers;
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBackend for HeadlessBackend {
    fn create_window(&self, console: &Console, fullscreen: bool, gl: bool) -> WindowId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state
            .windows
            .insert(id, (console.surface_width, console.surface_height));
        tracing::debug!(
            "create window {} for console {} ({}x{}, fullscreen={}, gl={})",
            id,
            console.index,
            console.surface_width,
            console.surface_height,
            fullscreen,
            gl
        );
        WindowId(id)
    }

    fn destroy_window(&self, window: WindowId) {
        self.state.lock().unwrap().windows.remove(&window.0);
        tracing::debug!("destroy window {}", window.0);
    }

    fn resize_window(&self, window: WindowId, width: u32, height: u32) {
        if let Some(size) = self.state.lock().unwrap().windows.get_mut(&window.0) {
            *size = (width, height);
        }
        tracing::debug!("resize window {} to {}x{}", window.0, width, height);
    }

    fn show_window(&self, window: WindowId) {
        tracing::debug!("show window {}", window.0);
    }

    fn hide_window(&self, window: WindowId) {
        tracing::debug!("hide window {}", window.0);
    }

    fn set_fullscreen(&self, window: WindowId, fullscreen: bool) {
        tracing::debug!("window {} fullscreen: {}", window.0, fullscreen);
    }

    fn set_caption(&self, window: WindowId, title: &str) {
        tracing::debug!("window {} caption: {:?}", window.0, title);
    }

    fn window_size(&self, window: WindowId) -> (u32, u32) {
        self.state
            .lock()
            .unwrap()
            .windows
            .get(&window.0)
            .copied()
            .unwrap_or((640, 480))
    }

    fn has_focus(&self, _window: WindowId) -> bool {
        true
    }

    fn modifiers_held(&self) -> KeyModifiers {
        self.state.lock().unwrap().modifiers
    }

    fn pointer_position(&self, _window: WindowId) -> (i32, i32) {
        self.state.lock().unwrap().pointer
    }

    fn warp_pointer(&self, window: WindowId, x: i32, y: i32) {
        self.state.lock().unwrap().pointer = (x, y);
        tracing::debug!("warp pointer in window {} to ({}, {})", window.0, x, y);
    }

    fn set_cursor_visible(&self, visible: bool) {
        tracing::debug!("cursor visible: {}", visible);
    }

    fn set_cursor(&self, cursor: HostCursor) {
        tracing::debug!("cursor: {:?}", cursor);
    }

    fn define_cursor(&self, sprite: &CursorSprite) {
        tracing::debug!(
            "guest cursor sprite {}x{} hot ({}, {})",
            sprite.width,
            sprite.height,
            sprite.hot_x,
            sprite.hot_y
        );
    }

    fn set_relative_mode(&self, enabled: bool) {
        tracing::debug!("relative pointer mode: {}", enabled);
    }

    fn set_input_grab(&self, window: WindowId, grabbed: bool) {
        tracing::debug!("window {} input grab: {}", window.0, grabbed);
    }

    fn present(&self, window: WindowId) {
        tracing::trace!("present window {}", window.0);
    }

    fn poll_event(&self) -> Option<HostEvent> {
        self.state.lock().unwrap().events.pop_front()
    }
}

// ============================================================================
// Logging Guest Input Queue
// ============================================================================

/// Guest input queue that logs instead of reaching a device model.
pub struct LoggingGuest {
    absolute: AtomicBool,
}

impl LoggingGuest {
    pub fn new() -> Self {
        Self {
            absolute: AtomicBool::new(false),
        }
    }

    /// Flip the reported pointer device mode.
    pub fn set_absolute(&self, absolute: bool) {
        self.absolute.store(absolute, Ordering::Relaxed);
    }
}

impl Default for LoggingGuest {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestInput for LoggingGuest {
    fn is_absolute(&self, _console: usize) -> bool {
        self.absolute.load(Ordering::Relaxed)
    }

    fn queue_absolute(&self, console: usize, axis: InputAxis, value: i32, min: i32, max: i32) {
        tracing::debug!(
            "console {} abs {:?} = {} in [{}, {})",
            console,
            axis,
            value,
            min,
            max
        );
    }

    fn queue_relative(&self, console: usize, axis: InputAxis, delta: i32) {
        tracing::debug!("console {} rel {:?} {:+}", console, axis, delta);
    }

    fn queue_button(&self, console: usize, button: InputButton, pressed: bool) {
        tracing::debug!("console {} button {:?} pressed={}", console, button, pressed);
    }

    fn queue_key(&self, console: usize, scancode: u32, pressed: bool) {
        tracing::debug!(
            "console {} key {:#04x} pressed={}",
            console,
            scancode,
            pressed
        );
    }

    fn flush(&self) {
        tracing::trace!("input batch flushed");
    }
}

// ============================================================================
// Stub Machine Control
// ============================================================================

/// Machine control stub: always running until a shutdown is requested.
pub struct StubVm {
    running: AtomicBool,
    shutdown_requested: AtomicBool,
}

impl StubVm {
    pub fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
            shutdown_requested: AtomicBool::new(false),
        }
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::Relaxed)
    }
}

impl Default for StubVm {
    fn default() -> Self {
        Self::new()
    }
}

impl VmControl for StubVm {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn request_shutdown(&self) {
        tracing::info!("guest shutdown requested");
        self.shutdown_requested.store(true, Ordering::Relaxed);
        self.running.store(false, Ordering::Relaxed);
    }

    fn notify_display_size(&self, console: usize, width: u32, height: u32) {
        tracing::debug!("console {} display size hint {}x{}", console, width, height);
    }

    fn send_text(&self, console: usize, text: &str) {
        tracing::debug!("console {} text input {:?}", console, text);
    }
}
