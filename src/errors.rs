//! Error types for markup serialization and file output.
//!
//! Scene construction never fails; only turning a tree into text and
//! writing that text somewhere can.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced to the caller of the serialization and output APIs
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("failed to write {}", path.display())]
    #[diagnostic(code(svgkit::io), help("check that the parent directory exists and is writable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize markup: {message}")]
    #[diagnostic(code(svgkit::markup))]
    Markup { message: String },
}

impl Error {
    pub(crate) fn markup(message: impl std::fmt::Display) -> Self {
        Error::Markup {
            message: message.to_string(),
        }
    }
}
