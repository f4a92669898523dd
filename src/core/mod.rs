pub mod backend;
pub mod console;
pub mod display;
pub mod errors;
pub mod events;
pub mod grab;
pub mod input;
pub mod latch;
pub mod pointer;
pub mod vm;

// Re-export key types
pub use console::{Console, ConsoleRegistry, ConsoleSpec};
pub use display::Display;
pub use errors::{CoreError, Result};
pub use events::{HostEvent, WindowEvent};
pub use grab::GrabState;
pub use pointer::PointerState;
