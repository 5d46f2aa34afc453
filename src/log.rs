//! Logging for svgkit's I/O edges: markup serialization and file writes.
//!
//! Built with the `tracing` feature, `debug!` and `trace!` are the `tracing`
//! macros. Without it they expand to nothing. Scene building itself never
//! logs.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
