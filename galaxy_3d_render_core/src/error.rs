//! Error types for the Galaxy3D render core
//!
//! Frustum queries never fail. Errors only come out of batch dispatch:
//! either from the device collaborator, from a batch's own commit, or from
//! a nested accumulator that cannot be locked.

use std::fmt;

/// Result type for Galaxy3D render core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D render core errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error reported by the device (Vulkan, WebGL, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (missing effect, technique, buffer, etc.)
    InvalidResource(String),

    /// Object is in a state that forbids the operation
    /// (poisoned lock, accumulator nested inside itself)
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error::InvalidResource` with the same message.
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_render_core::engine_err;
/// let err = engine_err!("galaxy3d::Effect", "Technique '{}' not found", "Main");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::InvalidResource(message)
    }};
}

/// Log an ERROR and return early with an `Error::InvalidResource`.
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_render_core::engine_bail;
/// # fn f() -> galaxy_3d_render_core::galaxy3d::Result<()> {
/// engine_bail!("galaxy3d::Effect", "Technique '{}' not found", "Main");
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
