//! Word tokenization
//!
//! A word is a maximal run of consecutive Bangla-script characters; anything
//! else (spaces, punctuation, other scripts, digits outside the Bengali
//! block) separates runs and is discarded.

use crate::script;

/// Split a sentence into Bangla word tokens.
///
/// Returns the maximal Bangla runs in order of appearance. Input without
/// any Bangla characters yields an empty Vec; no token is ever empty.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in sentence.chars() {
        if script::is_bangla(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}
