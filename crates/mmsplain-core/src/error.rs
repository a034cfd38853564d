//! Error types for the core library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The PDU could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] mmsplain_wsp::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A metadata file could not be loaded.
    #[error("Metadata error in {}: {message}", .file.display())]
    Metadata {
        /// The offending file.
        file: PathBuf,
        /// What was wrong with it.
        message: String,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
