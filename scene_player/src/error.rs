//! Error types for the scene player
//!
//! This module defines the error types used by the host side of the renderer
//! contract: renderer setup failures, call-order violations and backend faults.

use std::fmt;

/// Result type for scene player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene player errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Renderer or scene setup failed (maps the contract's ERROR on setup calls)
    InitializationFailed(String),

    /// A lifecycle call was issued out of order
    ContractViolation(String),

    /// Unknown or unusable renderer handle
    InvalidRenderer(String),

    /// Graphics backend error
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ContractViolation(msg) => write!(f, "Contract violation: {}", msg),
            Error::InvalidRenderer(msg) => write!(f, "Invalid renderer: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error, logging it at ERROR level with file:line first
///
/// # Example
///
/// ```no_run
/// let err = scene_player::sp_err!(ContractViolation, "sp::RendererHost", "no active scene");
/// ```
#[macro_export]
macro_rules! sp_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::sp_error!($source, "{}", message);
        $crate::sp::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```no_run
/// fn check(active: bool) -> scene_player::sp::Result<()> {
///     if !active {
///         scene_player::sp_bail!(ContractViolation, "sp::RendererHost", "no active scene");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! sp_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::sp_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
