// Tioga Display Bridge
// Copyright (c) 2026
//
// Display and input bridge between an emulated machine and the host
// desktop. The grab/focus/pointer state machine lives in core/;
// windowing toolkits and machine backends integrate through the traits
// in core::backend, core::input and core::vm.

pub mod config;
pub mod core;
pub mod platform;
pub mod prelude;

// Re-export key types
pub use crate::config::{DisplayConfig, GrabModifier};
pub use crate::core::console::{Console, ConsoleRegistry, ConsoleSpec};
pub use crate::core::display::Display;
pub use crate::core::errors::{CoreError, Result};
pub use crate::core::events::{HostEvent, WindowEvent};
