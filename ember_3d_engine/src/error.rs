//! Error types for the Ember3D engine
//!
//! Every fallible operation in the engine returns [`Result`]. Setup code is
//! expected to fail fast on these, but nothing in the library panics on bad
//! input: degenerate vectors, invalid projection parameters and bad mesh
//! precision are all reported as values.

use std::fmt;

/// Result type for Ember3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ember3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument was out of its valid range (precision, fov, near/far, ...)
    InvalidArgument(String),

    /// A vector had zero (or non-finite) length where a direction was required
    DegenerateVector(String),

    /// Invalid resource (unknown model, duplicate name, too many lights, ...)
    InvalidResource(String),

    /// Initialization failed (engine, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::DegenerateVector(msg) => write!(f, "Degenerate vector: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build an `Error::InvalidArgument`.
///
/// # Example
///
/// ```no_run
/// # use ember_3d_engine::engine_err;
/// # fn check(precision: u32) -> ember_3d_engine::ember3d::Result<()> {
/// if precision == 0 {
///     return Err(engine_err!("ember3d::MeshBuilder", "precision must be >= 1, got {}", precision));
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::ember3d::Engine::log_detailed(
            $crate::ember3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::ember3d::Error::InvalidArgument(message)
    }};
}

/// Log an ERROR and return early with an `Error::InvalidArgument`.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
