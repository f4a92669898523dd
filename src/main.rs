use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tioga::core::console::ConsoleSpec;
use tioga::core::events::{HostEvent, WindowEvent};
use tioga::core::input::{scancode, KeyModifiers, MouseButtons};
use tioga::platform::{HeadlessBackend, LoggingGuest, StubVm};
use tioga::{Display, DisplayConfig};

fn main() -> Result<()> {
    // Initialize logging with standardized format
    // Default log level is info, with debug for this crate
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tioga=debug")),
        )
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S".to_string(),
        ))
        .with_ansi(false)
        .init();

    let backend = Arc::new(HeadlessBackend::new());
    let guest = Arc::new(LoggingGuest::new());
    let vm = Arc::new(StubVm::new());

    let config = DisplayConfig {
        guest_name: Some("demo".to_string()),
        ..DisplayConfig::default()
    };
    let specs = [ConsoleSpec::default()];
    let mut display = Display::new(
        config,
        &specs,
        Arc::clone(&backend) as Arc<dyn tioga::core::backend::WindowBackend>,
        Arc::clone(&guest) as Arc<dyn tioga::core::input::GuestInput>,
        Arc::clone(&vm) as Arc<dyn tioga::core::vm::VmControl>,
    )?;

    let window = display
        .console(0)?
        .window
        .context("primary console has no window")?;

    // Scripted session standing in for a real host event loop.
    tracing::info!("focus the window and grab input via the hotkey");
    backend.push_event(HostEvent::Window {
        window,
        event: WindowEvent::FocusGained,
    });
    display.poll(0);

    backend.set_modifiers(KeyModifiers::LCTRL | KeyModifiers::LALT);
    backend.push_event(HostEvent::KeyDown {
        window,
        scancode: scancode::G,
        repeat: false,
    });
    backend.push_event(HostEvent::KeyUp {
        window,
        scancode: scancode::G,
    });
    display.poll(0);
    backend.set_modifiers(KeyModifiers::empty());
    // `display.` inside the macro args would hit the field::display shadow
    let grabbed = display.grab.grabbed;
    tracing::info!("grab active: {}", grabbed);

    tracing::info!("pointer and wheel traffic");
    backend.push_event(HostEvent::MouseMotion {
        window,
        x: 330,
        y: 248,
        dx: 10,
        dy: 8,
        buttons: MouseButtons::empty(),
    });
    backend.push_event(HostEvent::MouseButton {
        window,
        button: MouseButtons::LEFT,
        pressed: true,
        x: 330,
        y: 248,
        buttons: MouseButtons::empty(),
    });
    backend.push_event(HostEvent::MouseButton {
        window,
        button: MouseButtons::LEFT,
        pressed: false,
        x: 330,
        y: 248,
        buttons: MouseButtons::LEFT,
    });
    backend.push_event(HostEvent::Wheel {
        window,
        dx: 0,
        dy: 1,
    });
    display.poll(0);

    tracing::info!("fullscreen round trip via the hotkey");
    backend.set_modifiers(KeyModifiers::LCTRL | KeyModifiers::LALT);
    backend.push_event(HostEvent::KeyDown {
        window,
        scancode: scancode::F,
        repeat: false,
    });
    backend.push_event(HostEvent::KeyUp {
        window,
        scancode: scancode::F,
    });
    display.poll(0);
    backend.push_event(HostEvent::KeyDown {
        window,
        scancode: scancode::F,
        repeat: false,
    });
    backend.push_event(HostEvent::KeyUp {
        window,
        scancode: scancode::F,
    });
    display.poll(0);
    backend.set_modifiers(KeyModifiers::empty());

    tracing::info!("close the window");
    backend.push_event(HostEvent::Window {
        window,
        event: WindowEvent::CloseRequested,
    });
    while !vm.shutdown_requested() {
        display.poll(0);
    }

    display.shutdown();
    Ok(())
}
