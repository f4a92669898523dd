//! The display bridge.
//!
//! `Display` owns all shared state of the bridge, separate from the
//! windowing toolkit mechanics and the machine backend:
//! - the console registry (one entry per guest display head)
//! - the grab state machine and pointer translation state
//! - handles to the four collaborator seams
//!
//! Behavior is split across focused submodules, each an `impl Display`
//! block: `grab` (grab/focus/fullscreen transitions), `pointer`
//! (translation into guest input), `dispatch` (host event polling).

use crate::config::DisplayConfig;
use crate::core::backend::{Presenter, WindowBackend, WindowId};
use crate::core::console::{Console, ConsoleRegistry, ConsoleSpec};
use crate::core::errors::{CoreError, Result};
use crate::core::grab::GrabState;
use crate::core::input::GuestInput;
use crate::core::pointer::PointerState;
use crate::core::vm::VmControl;
use crate::platform::present::{GlPresenter, SoftPresenter};
use crate::prelude::Arc;

mod dispatch;
mod grab;
mod pointer;

/// The display bridge for one emulated machine.
pub struct Display {
    /// Static configuration.
    pub config: DisplayConfig,

    /// Per-output state, owned here exclusively.
    pub registry: ConsoleRegistry,

    /// Grab state shared by every output.
    pub grab: GrabState,

    /// Guest cursor tracking and button diffing.
    pub pointer: PointerState,

    /// Host window system adapter.
    backend: Arc<dyn WindowBackend>,

    /// Presentation flavor, selected once at construction.
    presenter: Arc<dyn Presenter>,

    /// Guest input queue.
    guest: Arc<dyn GuestInput>,

    /// Machine control surface.
    vm: Arc<dyn VmControl>,
}

impl Display {
    /// Build the display, selecting the presenter from `config.gl`.
    pub fn new(
        config: DisplayConfig,
        specs: &[ConsoleSpec],
        backend: Arc<dyn WindowBackend>,
        guest: Arc<dyn GuestInput>,
        vm: Arc<dyn VmControl>,
    ) -> Result<Self> {
        let presenter: Arc<dyn Presenter> = if config.gl {
            Arc::new(GlPresenter::new(Arc::clone(&backend)))
        } else {
            Arc::new(SoftPresenter::new(Arc::clone(&backend)))
        };
        Self::with_presenter(config, specs, backend, presenter, guest, vm)
    }

    /// Build the display with an explicit presenter.
    pub fn with_presenter(
        config: DisplayConfig,
        specs: &[ConsoleSpec],
        backend: Arc<dyn WindowBackend>,
        presenter: Arc<dyn Presenter>,
        guest: Arc<dyn GuestInput>,
        vm: Arc<dyn VmControl>,
    ) -> Result<Self> {
        if specs.is_empty() {
            return Err(CoreError::NoConsoles);
        }

        let mut registry = ConsoleRegistry::new(specs);
        // Secondary text consoles start hidden; only the primary output
        // is up regardless of kind.
        for con in registry.iter_mut() {
            if !con.graphic && con.index != 0 {
                con.hidden = true;
            }
        }

        let mut display = Self {
            grab: GrabState::new(config.grab_modifier),
            pointer: PointerState::default(),
            config,
            registry,
            backend,
            presenter,
            guest,
            vm,
        };

        if display.config.full_screen {
            display.grab.fullscreen = true;
        }
        for index in 0..display.registry.len() {
            display.window_create(index);
        }
        if display.grab.fullscreen {
            display.grab_start(0);
        }

        // Locals named `display` are shadowed inside the tracing macros
        // by `tracing::field::display`; log through hoisted bindings.
        let outputs = display.registry.len();
        let graphic = display.registry.iter().filter(|con| con.graphic).count();
        let flavor = display.presenter.name();
        tracing::info!(
            "display initialized: {} output(s) ({} graphic), {} presenter",
            outputs,
            graphic,
            flavor
        );
        Ok(display)
    }

    /// Borrow a console, failing on an out-of-range index.
    pub fn console(&self, index: usize) -> Result<&Console> {
        self.registry.get(index).ok_or(CoreError::InvalidConsole(index))
    }

    /// Destroy every host window. The display is inert afterwards.
    pub fn shutdown(&mut self) {
        for index in 0..self.registry.len() {
            self.window_destroy(index);
        }
        tracing::info!("display shut down");
    }

    // =========================================================================
    // Window Lifecycle
    // =========================================================================

    /// Create the host window for a console, if it does not exist yet.
    pub fn window_create(&mut self, index: usize) {
        let window = {
            let con = match self.registry.get(index) {
                Some(con) => con,
                None => return,
            };
            if con.window.is_some() {
                return;
            }
            self.backend
                .create_window(con, self.grab.fullscreen, self.config.gl)
        };
        if let Some(con) = self.registry.get_mut(index) {
            con.window = Some(window);
        }
        tracing::debug!("console {} window created: {:?}", index, window);
        self.update_caption(index);
    }

    /// Destroy a console's host window.
    pub fn window_destroy(&mut self, index: usize) {
        let taken = self
            .registry
            .get_mut(index)
            .and_then(|con| con.window.take());
        if let Some(window) = taken {
            self.backend.destroy_window(window);
            tracing::debug!("console {} window destroyed", index);
        }
    }

    /// Resize a console's window back to its guest surface size.
    pub fn window_resize(&mut self, index: usize) {
        let con = match self.registry.get(index) {
            Some(con) => con,
            None => return,
        };
        if let Some(window) = con.window {
            self.backend
                .resize_window(window, con.surface_width, con.surface_height);
        }
    }

    /// Toggle the hidden flag of an output and its window.
    pub fn toggle_visibility(&mut self, index: usize) {
        let (window, hidden) = match self.registry.get_mut(index) {
            Some(con) => {
                con.hidden = !con.hidden;
                (con.window, con.hidden)
            }
            None => return,
        };
        tracing::debug!("console {} hidden: {}", index, hidden);
        if let Some(window) = window {
            if hidden {
                self.backend.hide_window(window);
            } else {
                self.backend.show_window(window);
            }
        }
    }

    /// The guest replaced a console's display surface.
    pub fn guest_surface_changed(&mut self, index: usize, width: u32, height: u32) {
        let window = match self.registry.get_mut(index) {
            Some(con) => {
                con.surface_width = width;
                con.surface_height = height;
                con.window
            }
            None => return,
        };
        match window {
            None => self.window_create(index),
            Some(window) => self.backend.resize_window(window, width, height),
        }
        if let Some(con) = self.registry.get(index) {
            self.presenter.switch_surface(con);
        }
    }

    /// Repaint one output through the presenter.
    pub fn redraw(&self, index: usize) {
        if let Some(con) = self.registry.get(index) {
            self.presenter.redraw(con);
        }
    }

    // =========================================================================
    // Captions
    // =========================================================================

    /// Push the current caption to a console's window.
    pub fn update_caption(&self, index: usize) {
        let con = match self.registry.get(index) {
            Some(con) => con,
            None => return,
        };
        if let Some(window) = con.window {
            let title = self.caption(con);
            self.backend.set_caption(window, &title);
        }
    }

    /// Caption text: brand, guest name and head index, then either the
    /// stopped marker or the ungrab hint.
    fn caption(&self, console: &Console) -> String {
        let status = if !self.vm.is_running() {
            " [Stopped]"
        } else if self.grab.grabbed {
            self.grab.modifier.ungrab_hint()
        } else {
            ""
        };
        match &self.config.guest_name {
            Some(name) => format!("Tioga ({}-{}){}", name, console.index, status),
            None => format!("Tioga{}", status),
        }
    }

    // =========================================================================
    // Shared Helpers
    // =========================================================================

    /// Window handle of a console, if the console exists and has one.
    fn window_of(&self, index: usize) -> Option<WindowId> {
        self.registry.get(index).and_then(|con| con.window)
    }

    /// True when every key of the configured grab combination is held.
    fn grab_modifiers_held(&self) -> bool {
        self.backend
            .modifiers_held()
            .contains(self.grab.modifier.required())
    }
}
