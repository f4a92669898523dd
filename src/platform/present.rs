//! Presenter implementations.
//!
//! Two flavors of the `Presenter` capability. Which one a display
//! holds is decided once at construction; the rest of the core calls
//! through the trait without knowing which it got.

use crate::core::backend::{PixelFormat, Presenter, WindowBackend};
use crate::core::console::Console;
use crate::prelude::Arc;

/// Software presenter: surfaces are blitted through a plain texture
/// upload and pushed with `present`.
pub struct SoftPresenter {
    backend: Arc<dyn WindowBackend>,
}

impl SoftPresenter {
    pub fn new(backend: Arc<dyn WindowBackend>) -> Self {
        Self { backend }
    }
}

impl Presenter for SoftPresenter {
    fn name(&self) -> &'static str {
        "2d"
    }

    fn redraw(&self, console: &Console) {
        if let Some(window) = console.window {
            self.backend.present(window);
        }
    }

    fn switch_surface(&self, console: &Console) {
        // The upload texture follows the surface size; nothing survives
        // a switch.
        tracing::debug!(
            "console {} texture rebuilt for {}x{}",
            console.index,
            console.surface_width,
            console.surface_height
        );
        self.redraw(console);
    }

    fn supports_format(&self, _format: PixelFormat) -> bool {
        true
    }
}

/// GL presenter: surfaces are scanned out from a GL texture, so a
/// switch only rebinds and the swap happens in `present`.
pub struct GlPresenter {
    backend: Arc<dyn WindowBackend>,
}

impl GlPresenter {
    pub fn new(backend: Arc<dyn WindowBackend>) -> Self {
        Self { backend }
    }
}

impl Presenter for GlPresenter {
    fn name(&self) -> &'static str {
        "gl"
    }

    fn redraw(&self, console: &Console) {
        if let Some(window) = console.window {
            self.backend.present(window);
        }
    }

    fn switch_surface(&self, console: &Console) {
        tracing::debug!(
            "console {} scanout rebound for {}x{}",
            console.index,
            console.surface_width,
            console.surface_height
        );
    }

    fn supports_format(&self, format: PixelFormat) -> bool {
        matches!(format, PixelFormat::Xrgb8888 | PixelFormat::Argb8888)
    }
}
