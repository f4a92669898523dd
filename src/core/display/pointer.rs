//! Pointer translation into guest input.

use crate::core::backend::{CursorSprite, HostCursor};
use crate::core::display::Display;
use crate::core::input::{InputAxis, InputButton, MouseButtons, BUTTON_MAP};

impl Display {
    // =========================================================================
    // Host to Guest
    // =========================================================================

    /// Translate one host pointer sample into guest events.
    ///
    /// Button changes queue before motion so a press never lands on
    /// stale coordinates. Absolute consoles get the raw window position
    /// scaled against the guest surface; relative consoles get deltas,
    /// recomputed from the tracked guest position while the guest draws
    /// its own cursor.
    pub(crate) fn send_motion(
        &mut self,
        index: usize,
        dx: i32,
        dy: i32,
        x: i32,
        y: i32,
        buttons: MouseButtons,
    ) {
        self.update_buttons(index, buttons);

        if self.guest.is_absolute(index) {
            let (width, height) = match self.registry.get(index) {
                Some(con) => (con.surface_width, con.surface_height),
                None => return,
            };
            self.guest
                .queue_absolute(index, InputAxis::X, x, 0, width as i32);
            self.guest
                .queue_absolute(index, InputAxis::Y, y, 0, height as i32);
        } else {
            let (dx, dy) = if self.pointer.guest_cursor_visible {
                let ndx = x - self.pointer.guest_x;
                let ndy = y - self.pointer.guest_y;
                self.pointer.guest_x = x;
                self.pointer.guest_y = y;
                (ndx, ndy)
            } else {
                (dx, dy)
            };
            self.guest.queue_relative(index, InputAxis::X, dx);
            self.guest.queue_relative(index, InputAxis::Y, dy);
        }
        self.guest.flush();
    }

    /// Queue press/release events for every button whose state changed.
    fn update_buttons(&mut self, index: usize, buttons: MouseButtons) {
        let changed = self.pointer.previous_buttons ^ buttons;
        if changed.is_empty() {
            return;
        }
        for (mask, button) in BUTTON_MAP {
            if changed.contains(mask) {
                self.guest.queue_button(index, button, buttons.contains(mask));
            }
        }
        self.pointer.previous_buttons = buttons;
    }

    /// Translate a wheel tick into a button click toward the guest.
    ///
    /// Vertical motion wins over horizontal when both arrive in one
    /// event; a zero tick is dropped.
    pub(crate) fn send_wheel(&mut self, index: usize, dx: i32, dy: i32) {
        let button = if dy > 0 {
            InputButton::WheelUp
        } else if dy < 0 {
            InputButton::WheelDown
        } else if dx < 0 {
            InputButton::WheelLeft
        } else if dx > 0 {
            InputButton::WheelRight
        } else {
            return;
        };

        self.guest.queue_button(index, button, true);
        self.guest.flush();
        self.guest.queue_button(index, button, false);
        self.guest.flush();
    }

    // =========================================================================
    // Guest to Host
    // =========================================================================

    /// The guest moved or toggled its rendered cursor.
    pub fn guest_cursor_moved(&mut self, index: usize, x: i32, y: i32, visible: bool) {
        let graphic = match self.registry.get(index) {
            Some(con) => con.graphic,
            None => return,
        };
        if !graphic {
            return;
        }

        if visible {
            if !self.pointer.guest_cursor_visible {
                self.show_host_cursor(index);
            }
            if self.grab.grabbed
                || self.guest.is_absolute(index)
                || self.grab.absolute_active
            {
                self.backend.set_cursor(HostCursor::Guest);
                if !self.guest.is_absolute(index) && !self.grab.absolute_active {
                    if let Some(window) = self.window_of(index) {
                        self.backend.warp_pointer(window, x, y);
                    }
                }
            }
        } else if self.grab.grabbed {
            self.hide_host_cursor(index);
        }
        self.pointer.guest_cursor_visible = visible;
        self.pointer.guest_x = x;
        self.pointer.guest_y = y;
    }

    /// The guest defined a new cursor sprite.
    pub fn guest_cursor_defined(&mut self, index: usize, sprite: &CursorSprite) {
        self.backend.define_cursor(sprite);
        if self.pointer.guest_cursor_visible
            && (self.grab.grabbed
                || self.guest.is_absolute(index)
                || self.grab.absolute_active)
        {
            self.backend.set_cursor(HostCursor::Guest);
        }
    }
}
