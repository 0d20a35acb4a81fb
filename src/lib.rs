//! Bangla script text extraction and segmentation
//!
//! This crate filters mixed-content text down to its Bangla-script content,
//! tokenizes Bangla text into words (maximal Bangla runs) and sentences
//! (split on the dari `।`, `?`, `!`, and line breaks), and loads on-disk
//! wordlists into a deduplicated lexicon.
//!
//! The tokenizers and the extractor are pure, stateless transforms over the
//! values passed in; only the lexicon loader touches the filesystem.
//!
//! # Example
//!
//! ```rust
//! use borno::{extract_text, tokenize_sentences, tokenize_words};
//!
//! let sentences = tokenize_sentences("এটি একটি বাক্য। এটি আরেকটি কি?হ্যাঁ!");
//! assert_eq!(sentences, ["এটি একটি বাক্য।", "এটি আরেকটি কি?", "হ্যাঁ!"]);
//!
//! assert_eq!(tokenize_words("আমি ভালো আছি"), ["আমি", "ভালো", "আছি"]);
//!
//! assert_eq!(extract_text("আমি ভালো আছি, thanks!", false), "আমি ভালো আছি ");
//! ```

mod error;
mod extract;
mod input;
mod lexicon;
mod segment;
mod tokenize;

pub mod script;

pub use error::{Error, Result};
pub use extract::{extract, extract_batch, extract_text};
pub use input::{Extracted, Input};
pub use lexicon::Lexicon;
pub use segment::tokenize_sentences;
pub use tokenize::tokenize_words;
