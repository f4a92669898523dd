//! Core error types

use thiserror::Error;

/// Core display errors
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("no guest consoles to display")]
    NoConsoles,

    #[error("invalid console index: {0}")]
    InvalidConsole(usize),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
