//! Sentence tokenization
//!
//! Splits a paragraph into sentences on the Bangla dari (`।`), `?`, `!`,
//! and line breaks. A terminating dari/`?`/`!` stays attached to the end of
//! the sentence it closes; a line break separates sentences without leaving
//! a marker. Sentences are trimmed, and fragments that are empty after
//! trimming are dropped.
//!
//! Every literal occurrence of a terminator ends a sentence: there is no
//! abbreviation, decimal point, or quotation handling.

use crate::script;

/// Split a paragraph into sentence tokens.
///
/// Single left-to-right scan: characters accumulate in a sentence buffer;
/// a terminator is pushed onto the buffer and flushes it, a newline flushes
/// it without a marker, and end of input flushes the remainder.
pub fn tokenize_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut buffer = String::new();

    for ch in paragraph.chars() {
        if ch == '\n' {
            flush(&mut buffer, &mut sentences);
        } else if script::is_terminator(ch) {
            buffer.push(ch);
            flush(&mut buffer, &mut sentences);
        } else {
            buffer.push(ch);
        }
    }
    flush(&mut buffer, &mut sentences);

    sentences
}

/// Emit the buffered sentence if it is non-empty after trimming.
fn flush(buffer: &mut String, sentences: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_dari() {
        assert_eq!(
            tokenize_sentences("এটি একটি বাক্য। এটি আরেকটি বাক্য।"),
            ["এটি একটি বাক্য।", "এটি আরেকটি বাক্য।"]
        );
    }

    #[test]
    fn nested_question_and_exclamation() {
        assert_eq!(
            tokenize_sentences("এটি একটি বাক্য। এটি আরেকটি কি?হ্যাঁ!"),
            ["এটি একটি বাক্য।", "এটি আরেকটি কি?", "হ্যাঁ!"]
        );
    }

    #[test]
    fn newline_separates_without_marker() {
        assert_eq!(tokenize_sentences("লাইন ১\nলাইন ২"), ["লাইন ১", "লাইন ২"]);
    }

    #[test]
    fn exclamation_before_question() {
        assert_eq!(
            tokenize_sentences("থামো!তুমি কে?সে এল।"),
            ["থামো!", "তুমি কে?", "সে এল।"]
        );
    }

    #[test]
    fn trailing_fragment_kept_without_marker() {
        assert_eq!(
            tokenize_sentences("প্রথম বাক্য। শেষ অংশ"),
            ["প্রথম বাক্য।", "শেষ অংশ"]
        );
    }

    #[test]
    fn consecutive_delimiters() {
        // The "!" after "?" closes an otherwise-empty sentence; only
        // fully-empty fragments are dropped.
        assert_eq!(tokenize_sentences("সত্যি?! হ্যাঁ।"), ["সত্যি?", "!", "হ্যাঁ।"]);
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        assert!(tokenize_sentences("").is_empty());
        assert!(tokenize_sentences("   \n \n  ").is_empty());
    }

    #[test]
    fn dari_after_whitespace_keeps_a_bare_marker() {
        // Whitespace before the marker trims away, the marker itself does not
        assert_eq!(tokenize_sentences("ক।   । খ।"), ["ক।", "।", "খ।"]);
    }

    #[test]
    fn leading_and_trailing_whitespace_is_trimmed() {
        assert_eq!(
            tokenize_sentences("  এটি বাক্য।  \n  আরেকটি  "),
            ["এটি বাক্য।", "আরেকটি"]
        );
    }

    #[test]
    fn blank_lines_between_sentences() {
        assert_eq!(
            tokenize_sentences("প্রথম লাইন\n\n\nশেষ লাইন।"),
            ["প্রথম লাইন", "শেষ লাইন।"]
        );
    }

    #[test]
    fn every_non_whitespace_char_lands_in_exactly_one_sentence() {
        let paragraph = "বামাকো, ১৯ জুলাই : মালির সীমান্তের কাছে হামলা হয়েছে। কে দায়ী?জানা যায়নি!\nতদন্ত চলছে";
        let sentences = tokenize_sentences(paragraph);

        let expected: String = paragraph.chars().filter(|c| !c.is_whitespace()).collect();
        let actual: String = sentences
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert_eq!(actual, expected);
    }
}
