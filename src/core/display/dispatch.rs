//! Host event polling and routing.

use crate::core::backend::WindowId;
use crate::core::console::{
    MAX_IDLE_COUNT, REFRESH_INTERVAL_BUSY, REFRESH_INTERVAL_DEFAULT, REFRESH_INTERVAL_MINIMIZED,
};
use crate::core::display::Display;
use crate::core::events::{HostEvent, WindowEvent};
use crate::core::input::{HotkeyAction, MouseButtons};
use crate::prelude::Arc;

impl Display {
    /// Drain pending host events on behalf of one output, then update
    /// its refresh pacing.
    ///
    /// Runs on the UI thread, once per refresh tick. Input events reset
    /// the output to the busy refresh interval; quiet ticks walk the
    /// idle counter up and fall back to the default interval exactly
    /// once when the cap is reached. Window and quit events leave the
    /// pacing alone.
    pub fn poll(&mut self, console: usize) {
        let running = self.vm.is_running();
        let caption_stale = match self.registry.get_mut(console) {
            Some(con) if con.last_running != running => {
                con.last_running = running;
                true
            }
            _ => false,
        };
        if caption_stale {
            self.update_caption(console);
        }

        let backend = Arc::clone(&self.backend);
        let mut idle = true;
        while let Some(event) = backend.poll_event() {
            match event {
                HostEvent::KeyDown {
                    window,
                    scancode,
                    repeat,
                } => {
                    idle = false;
                    self.handle_key_down(window, scancode, repeat);
                }
                HostEvent::KeyUp { window, scancode } => {
                    idle = false;
                    self.handle_key_up(window, scancode);
                }
                HostEvent::TextInput { window, text } => {
                    idle = false;
                    self.handle_text_input(window, &text);
                }
                HostEvent::MouseMotion {
                    window,
                    x,
                    y,
                    dx,
                    dy,
                    buttons,
                } => {
                    idle = false;
                    self.handle_mouse_motion(window, x, y, dx, dy, buttons);
                }
                HostEvent::MouseButton {
                    window,
                    button,
                    pressed,
                    x,
                    y,
                    buttons,
                } => {
                    idle = false;
                    self.handle_mouse_button(window, button, pressed, x, y, buttons);
                }
                HostEvent::Wheel { window, dx, dy } => {
                    idle = false;
                    self.handle_wheel(window, dx, dy);
                }
                HostEvent::Window { window, event } => {
                    self.handle_window_event(window, event);
                }
                HostEvent::Quit => self.handle_quit(console),
            }
        }

        if let Some(con) = self.registry.get_mut(console) {
            if idle {
                if con.idle_counter < MAX_IDLE_COUNT {
                    con.idle_counter += 1;
                    if con.idle_counter >= MAX_IDLE_COUNT {
                        con.refresh_interval = REFRESH_INTERVAL_DEFAULT;
                    }
                }
            } else {
                con.idle_counter = 0;
                con.refresh_interval = REFRESH_INTERVAL_BUSY;
            }
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    fn handle_key_down(&mut self, window: WindowId, scancode: u32, repeat: bool) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        let suppressed = self
            .registry
            .get(index)
            .is_some_and(|con| con.hotkey_suppress.is_armed());

        let mut consumed = false;
        if !suppressed && self.grab_modifiers_held() && !repeat {
            if let Some(action) = HotkeyAction::from_scancode(scancode) {
                consumed = self.run_hotkey(index, action);
            }
        }
        if !consumed {
            self.guest.queue_key(index, scancode, true);
            self.guest.flush();
        }
    }

    fn handle_key_up(&mut self, window: WindowId, scancode: u32) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        if let Some(con) = self.registry.get_mut(index) {
            con.hotkey_suppress.reset();
        }
        self.guest.queue_key(index, scancode, false);
        self.guest.flush();
    }

    /// Execute a hotkey. Returns false when the key should still reach
    /// the guest, which happens for a visibility digit with no output
    /// behind it.
    fn run_hotkey(&mut self, index: usize, action: HotkeyAction) -> bool {
        match action {
            HotkeyAction::ToggleVisibility(target) => {
                // The grab ends even when the digit turns out to be
                // unmapped; switching outputs with input captured would
                // strand the pointer.
                if self.grab.grabbed {
                    self.grab_end(index);
                }
                if target < self.registry.len() {
                    self.toggle_visibility(target);
                    true
                } else {
                    false
                }
            }
            HotkeyAction::ToggleFullscreen => {
                self.toggle_fullscreen(index);
                true
            }
            HotkeyAction::ToggleGrab => {
                if !self.grab.grabbed {
                    self.grab_start(index);
                } else if !self.grab.fullscreen {
                    self.grab_end(index);
                }
                true
            }
            HotkeyAction::ForceResize => {
                self.window_resize(index);
                if let Some(con) = self.registry.get(index) {
                    self.presenter.switch_surface(con);
                }
                true
            }
        }
    }

    fn handle_text_input(&mut self, window: WindowId, text: &str) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        // Graphic consoles see raw scancodes instead.
        if let Some(con) = self.registry.get(index) {
            if !con.graphic {
                self.vm.send_text(index, text);
            }
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn handle_mouse_motion(
        &mut self,
        window: WindowId,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
        buttons: MouseButtons,
    ) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        if !self.registry.get(index).is_some_and(|con| con.graphic) {
            return;
        }

        let absolute = self.guest.is_absolute(index) || self.grab.absolute_active;
        if absolute {
            let (width, height) = self.backend.window_size(window);
            let max_x = width as i32 - 1;
            let max_y = height as i32 - 1;
            if self.grab.grabbed
                && !self.grab.fullscreen
                && (x == 0 || y == 0 || x == max_x || y == max_y)
            {
                self.grab_end(index);
            }
            if !self.grab.grabbed && x > 0 && x < max_x && y > 0 && y < max_y {
                self.grab_start(index);
            }
        }
        if self.grab.grabbed || absolute {
            self.send_motion(index, dx, dy, x, y, buttons);
        }
    }

    fn handle_mouse_button(
        &mut self,
        window: WindowId,
        button: MouseButtons,
        pressed: bool,
        x: i32,
        y: i32,
        buttons: MouseButtons,
    ) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        if !self.registry.get(index).is_some_and(|con| con.graphic) {
            return;
        }

        if !self.grab.grabbed && !self.guest.is_absolute(index) {
            // Releasing the left button inside an ungrabbed window is
            // the click-to-grab gesture.
            if !pressed && button == MouseButtons::LEFT {
                self.grab_start(index);
            }
        } else {
            let mut state = buttons;
            if pressed {
                state.insert(button);
            } else {
                state.remove(button);
            }
            self.send_motion(index, 0, 0, x, y, state);
        }
    }

    fn handle_wheel(&mut self, window: WindowId, dx: i32, dy: i32) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        if !self.registry.get(index).is_some_and(|con| con.graphic) {
            return;
        }
        self.send_wheel(index, dx, dy);
    }

    // =========================================================================
    // Window and Quit
    // =========================================================================

    fn handle_window_event(&mut self, window: WindowId, event: WindowEvent) {
        let index = match self.registry.index_of_window(window) {
            Some(index) => index,
            None => return,
        };
        match event {
            WindowEvent::Resized { width, height } => {
                self.vm.notify_display_size(index, width, height);
                self.redraw(index);
            }
            WindowEvent::Exposed => self.redraw(index),
            WindowEvent::FocusGained => self.focus_gained(index),
            WindowEvent::FocusLost => self.focus_lost(index),
            WindowEvent::PointerEntered => self.pointer_entered(index),
            WindowEvent::Minimized => {
                if let Some(con) = self.registry.get_mut(index) {
                    con.refresh_interval = REFRESH_INTERVAL_MINIMIZED;
                }
            }
            WindowEvent::Restored => {
                if let Some(con) = self.registry.get_mut(index) {
                    con.refresh_interval = REFRESH_INTERVAL_DEFAULT;
                }
            }
            WindowEvent::Shown => {
                if let Some(con) = self.registry.get_mut(index) {
                    con.hidden = false;
                }
            }
            WindowEvent::Hidden => {
                if let Some(con) = self.registry.get_mut(index) {
                    con.hidden = true;
                }
            }
            WindowEvent::CloseRequested => self.handle_close(index),
        }
    }

    /// Close policy: a permitted close on a graphic output shuts the
    /// machine down; every other close hides the window.
    fn handle_close(&mut self, index: usize) {
        let graphic = match self.registry.get(index) {
            Some(con) => con.graphic,
            None => return,
        };
        if graphic && self.config.window_close {
            tracing::info!("console {} close requested, shutting down", index);
            self.vm.request_shutdown();
            return;
        }
        if let Some(window) = self.window_of(index) {
            self.backend.hide_window(window);
        }
        if let Some(con) = self.registry.get_mut(index) {
            con.hidden = true;
        }
    }

    fn handle_quit(&mut self, console: usize) {
        self.handle_close(console);
    }
}
