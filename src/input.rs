//! Input and output shape abstractions for extraction
//!
//! Extraction is polymorphic over the shape of its input: a single text
//! unit or an ordered batch of them. The shape is a closed enum rather than
//! runtime type inspection, so an input the extractor cannot handle is an
//! explicit [`Error::UnsupportedInput`](crate::Error::UnsupportedInput)
//! instead of a silent empty result.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Input to the extractor
#[derive(Debug, Clone)]
pub enum Input {
    /// A single text unit
    Text(String),
    /// An ordered collection of text units
    Batch(Vec<String>),
    /// Raw UTF-8 bytes, validated on use
    Bytes(Vec<u8>),
    /// A file path
    ///
    /// Carried for API symmetry with byte input, but the extractor rejects
    /// it: extraction is a pure transform and performs no I/O.
    File(PathBuf),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from an ordered collection of text units
    pub fn from_batch<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Batch(texts.into_iter().map(Into::into).collect())
    }

    /// Create input from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<String>> for Input {
    fn from(texts: Vec<String>) -> Self {
        Input::Batch(texts)
    }
}

/// Extraction output, mirroring the shape of the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extracted {
    /// Result of extracting a single text unit
    Text(String),
    /// Result of extracting a collection, element-wise
    Batch(Vec<String>),
}

impl Extracted {
    /// Unwrap a single-text result
    pub fn into_text(self) -> Result<String> {
        match self {
            Extracted::Text(text) => Ok(text),
            Extracted::Batch(_) => Err(Error::UnsupportedInput(
                "expected a single text unit, got a batch",
            )),
        }
    }

    /// Unwrap a batch result
    pub fn into_batch(self) -> Result<Vec<String>> {
        match self {
            Extracted::Batch(texts) => Ok(texts),
            Extracted::Text(_) => Err(Error::UnsupportedInput(
                "expected a batch, got a single text unit",
            )),
        }
    }
}
