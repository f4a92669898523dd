//! Machine-side control surface.

/// Control calls the display makes toward the emulated machine.
///
/// All failure handling lives behind the implementation; from the
/// display's perspective these calls cannot fail.
pub trait VmControl: Send + Sync {
    /// True while the guest is executing. Drives the caption status.
    fn is_running(&self) -> bool;

    /// Ask the machine to shut down (a host window was closed).
    fn request_shutdown(&self);

    /// Advertise a new preferred display size after a host window resize.
    fn notify_display_size(&self, console: usize, width: u32, height: u32);

    /// Put text into a text console.
    fn send_text(&self, console: usize, text: &str);
}
