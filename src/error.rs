//! Error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Error type for fallible operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input kind the extractor cannot transform
    #[error("Unsupported input kind: {0}")]
    UnsupportedInput(&'static str),

    /// Input bytes that do not decode as UTF-8
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reading a wordlist file
    #[error("Failed to read wordlist {}: {source}", path.display())]
    WordlistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, Error>;
