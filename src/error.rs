//! Error types for pdfoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised at the library's outer surfaces.
///
/// Structure inference itself never fails; these cover reading fragment
/// files, validating them and rendering results.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON input or failed serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fragment violates the input contract.
    #[error("Invalid fragment at index {index}: {reason}")]
    InvalidFragment {
        /// Position of the fragment in the input sequence
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an `InvalidFragment` error.
    pub fn invalid_fragment(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidFragment {
            index,
            reason: reason.into(),
        }
    }
}
