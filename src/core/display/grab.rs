//! Grab, focus and fullscreen transitions.

use crate::core::backend::HostCursor;
use crate::core::display::Display;

impl Display {
    // =========================================================================
    // Grab Transitions
    // =========================================================================

    /// Capture host input for a console's window.
    ///
    /// Only graphic outputs are grabbed, and only while their window
    /// holds focus; grabbing an unfocused window would wedge the host
    /// pointer with no visible owner.
    pub fn grab_start(&mut self, index: usize) {
        let (window, graphic) = match self.registry.get(index) {
            Some(con) => match con.window {
                Some(window) => (window, con.graphic),
                None => return,
            },
            None => return,
        };
        if !graphic {
            return;
        }
        if !self.backend.has_focus(window) {
            return;
        }

        if self.pointer.guest_cursor_visible {
            self.backend.set_cursor(HostCursor::Guest);
            if !self.guest.is_absolute(index) && !self.grab.absolute_active {
                self.backend
                    .warp_pointer(window, self.pointer.guest_x, self.pointer.guest_y);
            }
        } else {
            self.hide_host_cursor(index);
        }
        self.backend.set_input_grab(window, true);
        self.grab.grabbed = true;
        self.update_caption(index);
        tracing::debug!("console {} input grabbed", index);
    }

    /// Release host input capture.
    pub fn grab_end(&mut self, index: usize) {
        if let Some(window) = self.window_of(index) {
            self.backend.set_input_grab(window, false);
        }
        self.grab.grabbed = false;
        self.show_host_cursor(index);
        self.update_caption(index);
        tracing::debug!("console {} input released", index);
    }

    /// Hide the host cursor while the guest drives pointer rendering.
    pub(crate) fn hide_host_cursor(&self, index: usize) {
        if self.config.show_cursor {
            return;
        }
        self.backend.set_cursor_visible(false);
        if !self.guest.is_absolute(index) {
            self.backend.set_relative_mode(true);
        }
    }

    /// Bring the host cursor back once the guest no longer owns it.
    pub(crate) fn show_host_cursor(&self, index: usize) {
        if self.config.show_cursor {
            return;
        }
        let absolute = self.guest.is_absolute(index);
        if !absolute {
            self.backend.set_relative_mode(false);
        }
        if self.pointer.guest_cursor_visible
            && (self.grab.grabbed || absolute || self.grab.absolute_active)
        {
            self.backend.set_cursor(HostCursor::Guest);
        } else {
            self.backend.set_cursor(HostCursor::Default);
        }
        self.backend.set_cursor_visible(true);
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    /// Flip fullscreen for one output.
    ///
    /// Entering remembers whether a grab was already active so leaving
    /// can put the grab back the way it was found.
    pub fn toggle_fullscreen(&mut self, index: usize) {
        let window = match self.window_of(index) {
            Some(window) => window,
            None => return,
        };
        self.grab.fullscreen = !self.grab.fullscreen;
        if self.grab.fullscreen {
            self.backend.set_fullscreen(window, true);
            self.grab.saved_grab = self.grab.grabbed;
            self.grab_start(index);
        } else {
            if !self.grab.saved_grab {
                self.grab_end(index);
            }
            self.backend.set_fullscreen(window, false);
        }
        tracing::debug!("console {} fullscreen: {}", index, self.grab.fullscreen);
        self.redraw(index);
    }

    // =========================================================================
    // Pointer Mode
    // =========================================================================

    /// Grab when the host pointer already sits strictly inside the
    /// window. Called on absolute-mode transitions and pointer entry;
    /// a pointer on the border is on its way out, not in.
    pub(crate) fn absolute_grab(&mut self, index: usize) {
        let window = match self.window_of(index) {
            Some(window) => window,
            None => return,
        };
        let (x, y) = self.backend.pointer_position(window);
        let (width, height) = self.backend.window_size(window);
        if x > 0 && x < width as i32 - 1 && y > 0 && y < height as i32 - 1 {
            self.grab_start(index);
        }
    }

    /// The guest pointer device switched between relative and absolute
    /// delivery. Evaluated against the primary output.
    pub fn mouse_mode_changed(&mut self) {
        if self.guest.is_absolute(0) {
            if !self.grab.absolute_active {
                self.grab.absolute_active = true;
                self.backend.set_relative_mode(false);
                self.absolute_grab(0);
                tracing::debug!("pointer switched to absolute mode");
            }
        } else if self.grab.absolute_active {
            if !self.grab.fullscreen {
                self.grab_end(0);
            }
            self.grab.absolute_active = false;
            tracing::debug!("pointer switched to relative mode");
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The window regained host focus.
    ///
    /// A pending regrab left by `focus_lost` is consumed and the grab
    /// re-established from scratch; otherwise this behaves like the
    /// pointer entering the window.
    pub(crate) fn focus_gained(&mut self, index: usize) {
        if self.grab.pending_regrab.consume() {
            if self.grab.grabbed {
                self.grab_end(index);
            }
            self.grab_start(index);
            return;
        }
        self.pointer_entered(index);
    }

    /// The window lost host focus.
    ///
    /// An active windowed grab is surrendered and flagged for
    /// re-establishment on the next focus gain. Fullscreen grabs stay,
    /// and a loss while a regrab is already pending changes nothing.
    pub(crate) fn focus_lost(&mut self, index: usize) {
        if self.grab.pending_regrab.is_armed() {
            return;
        }
        if self.grab.grabbed && !self.grab.fullscreen {
            self.grab_end(index);
            self.grab.pending_regrab.arm();
        }
    }

    /// The host pointer entered the window.
    ///
    /// In absolute mode the grab follows the pointer in. The hotkey
    /// suppression latch is armed if the grab combination is held right
    /// now, so a combination pressed before entry does not fire inside.
    pub(crate) fn pointer_entered(&mut self, index: usize) {
        if !self.grab.grabbed && (self.guest.is_absolute(index) || self.grab.absolute_active) {
            self.absolute_grab(index);
        }
        let held = self.grab_modifiers_held();
        if let Some(con) = self.registry.get_mut(index) {
            if held {
                con.hotkey_suppress.arm();
            } else {
                con.hotkey_suppress.reset();
            }
        }
    }
}
