//! Bangla content extraction
//!
//! Filters mixed-script text down to its Bangla content. Spaces always
//! survive; structural punctuation survives only when requested; everything
//! else is dropped in place, leaving no replacement character.

use crate::error::{Error, Result};
use crate::input::{Extracted, Input};
use crate::script;

/// Extract the Bangla content of a single text unit.
///
/// Retains a character iff it is Bangla script, a space, or (when
/// `keep_punctuation` is set) structural punctuation. Character order is
/// preserved.
pub fn extract_text(text: &str, keep_punctuation: bool) -> String {
    text.chars()
        .filter(|&ch| {
            script::is_bangla(ch)
                || ch == ' '
                || (keep_punctuation && script::is_structural_punct(ch))
        })
        .collect()
}

/// Extract the Bangla content of each element of a collection.
///
/// Element-wise [`extract_text`]: the output has the same length as the
/// input and element `i` derives only from element `i`.
pub fn extract_batch(texts: &[String], keep_punctuation: bool) -> Vec<String> {
    texts
        .iter()
        .map(|text| extract_text(text, keep_punctuation))
        .collect()
}

/// Extract Bangla content from an [`Input`], preserving its shape.
///
/// Byte input is UTF-8 validated and treated as a single text unit. File
/// input is rejected with [`Error::UnsupportedInput`]: extraction performs
/// no I/O, so read the file first and pass its contents.
pub fn extract(input: Input, keep_punctuation: bool) -> Result<Extracted> {
    match input {
        Input::Text(text) => Ok(Extracted::Text(extract_text(&text, keep_punctuation))),
        Input::Batch(texts) => Ok(Extracted::Batch(extract_batch(&texts, keep_punctuation))),
        Input::Bytes(bytes) => {
            let text = String::from_utf8(bytes)
                .map_err(|e| Error::InvalidInput(format!("Invalid UTF-8 encoding: {e}")))?;
            Ok(Extracted::Text(extract_text(&text, keep_punctuation)))
        }
        Input::File(_) => Err(Error::UnsupportedInput(
            "file input: extraction performs no I/O, pass the file contents as text",
        )),
    }
}
