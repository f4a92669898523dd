//! Platform adapters.
//!
//! The display core stays toolkit-agnostic; adapters implementing the
//! `WindowBackend`, `GuestInput` and `VmControl` seams live here,
//! together with the two presenter flavors.

pub mod api;
pub mod present;

pub use api::{HeadlessBackend, LoggingGuest, StubVm};
pub use present::{GlPresenter, SoftPresenter};
