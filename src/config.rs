//! Display configuration.
//!
//! Everything here is decided by the embedding layer (command line,
//! machine definition) before the display is built; nothing in this
//! module changes at runtime.

use crate::core::input::KeyModifiers;

// ============================================================================
// Grab Modifier
// ============================================================================

/// Modifier combination that arms the UI hotkeys (grab toggle,
/// fullscreen, output visibility, forced resize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabModifier {
    /// Left Ctrl + left Alt (the classic default).
    #[default]
    CtrlAlt,
    /// Left Ctrl + left Alt + left Shift.
    CtrlAltShift,
    /// Right Ctrl alone.
    RightCtrl,
}

impl GrabModifier {
    /// Modifier keys that must all be held for a hotkey to fire.
    pub fn required(&self) -> KeyModifiers {
        match self {
            GrabModifier::CtrlAlt => KeyModifiers::LCTRL | KeyModifiers::LALT,
            GrabModifier::CtrlAltShift => {
                KeyModifiers::LCTRL | KeyModifiers::LALT | KeyModifiers::LSHIFT
            }
            GrabModifier::RightCtrl => KeyModifiers::RCTRL,
        }
    }

    /// Caption suffix shown while input is grabbed.
    #[cfg(not(target_os = "macos"))]
    pub fn ungrab_hint(&self) -> &'static str {
        match self {
            GrabModifier::CtrlAlt => " - Press Ctrl-Alt-G to exit grab",
            GrabModifier::CtrlAltShift => " - Press Ctrl-Alt-Shift-G to exit grab",
            GrabModifier::RightCtrl => " - Press Right-Ctrl-G to exit grab",
        }
    }

    /// Caption suffix shown while input is grabbed.
    #[cfg(target_os = "macos")]
    pub fn ungrab_hint(&self) -> &'static str {
        match self {
            GrabModifier::CtrlAlt => " - Press \u{2303}\u{2325}G to exit grab",
            GrabModifier::CtrlAltShift => " - Press \u{2303}\u{2325}\u{21e7}G to exit grab",
            GrabModifier::RightCtrl => " - Press right-\u{2303}G to exit grab",
        }
    }
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Configuration for the display bridge.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Guest name shown in window captions.
    pub guest_name: Option<String>,
    /// Modifier combination for UI hotkeys.
    pub grab_modifier: GrabModifier,
    /// Start every output fullscreen (with input grabbed).
    pub full_screen: bool,
    /// Allow a window close request to shut the machine down.
    /// When false a close request hides the window instead.
    pub window_close: bool,
    /// Never hide the host cursor, even while grabbed.
    pub show_cursor: bool,
    /// Select the GL presenter instead of the software one.
    pub gl: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            guest_name: None,
            grab_modifier: GrabModifier::default(),
            full_screen: false,
            window_close: true,
            show_cursor: false,
            gl: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_modifier_masks() {
        assert_eq!(
            GrabModifier::CtrlAlt.required(),
            KeyModifiers::LCTRL | KeyModifiers::LALT
        );
        assert!(GrabModifier::CtrlAltShift
            .required()
            .contains(KeyModifiers::LSHIFT));
        assert_eq!(GrabModifier::RightCtrl.required(), KeyModifiers::RCTRL);
    }

    #[test]
    fn test_held_mask_covers_required() {
        // Extra modifiers held alongside the combination still count
        let held = KeyModifiers::LCTRL | KeyModifiers::LALT | KeyModifiers::LSHIFT;
        assert!(held.contains(GrabModifier::CtrlAlt.required()));
        assert!(!KeyModifiers::LCTRL.contains(GrabModifier::CtrlAlt.required()));
    }

    #[test]
    fn test_ungrab_hint_names_the_combination() {
        assert!(GrabModifier::CtrlAlt.ungrab_hint().contains("G to exit grab"));
        assert_ne!(
            GrabModifier::CtrlAlt.ungrab_hint(),
            GrabModifier::RightCtrl.ungrab_hint()
        );
    }
}
