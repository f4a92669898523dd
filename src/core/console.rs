//! Per-output console state and the registry that owns it.
//!
//! One `Console` per guest display head. The registry is the only
//! owner; the grab machine and the dispatcher address consoles by
//! index and borrow through it.

use std::time::Duration;

use crate::core::backend::WindowId;
use crate::core::latch::Latch;

/// Refresh interval while host input is flowing.
pub const REFRESH_INTERVAL_BUSY: Duration = Duration::from_millis(10);
/// Power-saving refresh interval once an output has gone idle.
pub const REFRESH_INTERVAL_DEFAULT: Duration = Duration::from_millis(30);
/// Refresh interval for a minimized window.
pub const REFRESH_INTERVAL_MINIMIZED: Duration = Duration::from_millis(500);
/// Idle poll cycles before the refresh interval drops back to default.
pub const MAX_IDLE_COUNT: u32 =
    (2 * REFRESH_INTERVAL_DEFAULT.as_millis() / REFRESH_INTERVAL_BUSY.as_millis() + 1) as u32;

/// Static description of one guest display head, handed to
/// `Display::new`. The console count is fixed for the session.
#[derive(Debug, Clone)]
pub struct ConsoleSpec {
    /// Graphic console (framebuffer) vs text console.
    pub graphic: bool,
    /// Initial guest surface size in pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for ConsoleSpec {
    fn default() -> Self {
        Self {
            graphic: true,
            width: 640,
            height: 480,
        }
    }
}

/// Live state of one output.
#[derive(Debug, Clone)]
pub struct Console {
    /// Position in the guest's console list.
    pub index: usize,
    /// Host window, once created.
    pub window: Option<WindowId>,
    /// Current guest surface size in pixels.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Graphic console (framebuffer) vs text console.
    pub graphic: bool,
    /// Window currently hidden.
    pub hidden: bool,
    /// Swallows the hotkey a window manager replays into a freshly
    /// focused window; cleared on the next key-up.
    pub hotkey_suppress: Latch,
    /// Poll cycles without input since the last busy one.
    pub idle_counter: u32,
    /// Machine run state at the last caption update.
    pub last_running: bool,
    /// Desired refresh interval for this output.
    pub refresh_interval: Duration,
}

impl Console {
    pub fn new(index: usize, spec: &ConsoleSpec) -> Self {
        Self {
            index,
            window: None,
            surface_width: spec.width,
            surface_height: spec.height,
            graphic: spec.graphic,
            hidden: false,
            hotkey_suppress: Latch::default(),
            idle_counter: 0,
            last_running: false,
            refresh_interval: REFRESH_INTERVAL_DEFAULT,
        }
    }
}

// ============================================================================
// Console Registry
// ============================================================================

/// Owns every console; everyone else borrows.
#[derive(Debug)]
pub struct ConsoleRegistry {
    consoles: Vec<Console>,
}

impl ConsoleRegistry {
    pub fn new(specs: &[ConsoleSpec]) -> Self {
        Self {
            consoles: specs
                .iter()
                .enumerate()
                .map(|(index, spec)| Console::new(index, spec))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.consoles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consoles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Console> {
        self.consoles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Console> {
        self.consoles.get_mut(index)
    }

    /// Resolve a host window back to its console.
    pub fn index_of_window(&self, window: WindowId) -> Option<usize> {
        self.consoles
            .iter()
            .position(|con| con.window == Some(window))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Console> {
        self.consoles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Console> {
        self.consoles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_window_lookup() {
        let specs = vec![ConsoleSpec::default(), ConsoleSpec::default()];
        let mut registry = ConsoleRegistry::new(&specs);
        registry.get_mut(0).unwrap().window = Some(WindowId(7));
        registry.get_mut(1).unwrap().window = Some(WindowId(9));

        assert_eq!(registry.index_of_window(WindowId(9)), Some(1));
        assert_eq!(registry.index_of_window(WindowId(7)), Some(0));
        assert_eq!(registry.index_of_window(WindowId(42)), None);
    }

    #[test]
    fn test_registry_indices_follow_spec_order() {
        let specs = vec![
            ConsoleSpec::default(),
            ConsoleSpec {
                graphic: false,
                width: 80,
                height: 25,
            },
            ConsoleSpec::default(),
        ];
        let registry = ConsoleRegistry::new(&specs);
        let indices: Vec<usize> = registry.iter().map(|con| con.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(registry.iter().filter(|con| con.graphic).count(), 2);
    }

    #[test]
    fn test_console_initial_state() {
        let con = Console::new(
            3,
            &ConsoleSpec {
                graphic: false,
                width: 80,
                height: 25,
            },
        );
        assert_eq!(con.index, 3);
        assert!(con.window.is_none());
        assert!(!con.graphic);
        assert!(!con.hidden);
        assert_eq!(con.idle_counter, 0);
        assert_eq!(con.refresh_interval, REFRESH_INTERVAL_DEFAULT);
    }

    #[test]
    fn test_idle_cap_constant() {
        // 2 * 30ms / 10ms + 1
        assert_eq!(MAX_IDLE_COUNT, 7);
    }
}
