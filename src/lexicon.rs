//! Wordlist loading
//!
//! Builds a deduplicated Bangla lexicon from a fixed set of on-disk
//! wordlists, one word per line. The file set, their line formats, and the
//! character filters are fixed by the source data, not configurable.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// The nukta modifier (U+09BC); words carrying it are excluded.
const NUKTA: char = '\u{09BC}';

/// The ো vowel sign (U+09CB); words carrying it are excluded.
const O_KAR: char = '\u{09CB}';

/// Zero-width non-joiner; LibreOffice dictionary entries containing it are
/// hyphenation artifacts, not words.
const ZWNJ: char = '\u{200C}';

/// How a wordlist file's lines map to words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineFormat {
    /// The whole line (minus the terminator) is the word
    WholeLine,
    /// The word is the first space-delimited field; the rest is metadata
    FirstField,
    /// Whole line, skipping lines that contain a ZWNJ
    WholeLineSkipZwnj,
}

/// One source wordlist: file name, line format, and whether it joins the
/// merged lexicon.
#[derive(Debug, Clone, Copy)]
struct Wordlist {
    file_name: &'static str,
    format: LineFormat,
    merged: bool,
}

/// The five fixed sources. `bangla_pedia.txt` is parsed for its headword
/// field but kept out of the merged set.
const WORDLISTS: [Wordlist; 5] = [
    Wordlist {
        file_name: "bangla_pedia.txt",
        format: LineFormat::FirstField,
        merged: false,
    },
    Wordlist {
        file_name: "bangla_academy.txt",
        format: LineFormat::WholeLine,
        merged: true,
    },
    Wordlist {
        file_name: "libreoffice.txt",
        format: LineFormat::WholeLineSkipZwnj,
        merged: true,
    },
    Wordlist {
        file_name: "avrodict.txt",
        format: LineFormat::WholeLine,
        merged: true,
    },
    Wordlist {
        file_name: "sanshod_dict.txt",
        format: LineFormat::WholeLine,
        merged: true,
    },
];

/// Deduplicated dictionary of Bangla words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load and merge the wordlists found in `dir`.
    ///
    /// All five source files must be present and readable; a failure on any
    /// of them aborts the load with no partial result. Words containing the
    /// nukta modifier or the `ো` vowel sign are excluded from the merged
    /// set, as are empty lines.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut words = HashSet::new();

        for list in WORDLISTS {
            let path = dir.join(list.file_name);
            let loaded = read_wordlist(&path, list.format)?;
            log::debug!("loaded {} words from {}", loaded.len(), path.display());

            if list.merged {
                words.extend(
                    loaded
                        .into_iter()
                        .filter(|w| !w.contains(NUKTA) && !w.contains(O_KAR)),
                );
            }
        }

        log::debug!("merged lexicon holds {} words", words.len());
        Ok(Self { words })
    }

    /// Whether `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Read one wordlist file into its (possibly duplicated) word sequence.
fn read_wordlist(path: &Path, format: LineFormat) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::WordlistIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for line in content.lines() {
        // lines() strips the \n; the CRLF-terminated sources still carry \r
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        match format {
            LineFormat::WholeLine => words.push(line.to_string()),
            LineFormat::FirstField => {
                if let Some(field) = line.split(' ').next() {
                    words.push(field.to_string());
                }
            }
            LineFormat::WholeLineSkipZwnj => {
                if !line.contains(ZWNJ) {
                    words.push(line.to_string());
                }
            }
        }
    }

    Ok(words)
}
