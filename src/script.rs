//! Bangla script character classification
//!
//! Fixed predicates over single characters; every other module builds on
//! these. The relevant marks:
//! - `।` (U+0964) - dari, the Bangla full stop
//! - `?` / `!` - Latin question and exclamation marks, used as-is in Bangla text
//! - U+0980..U+09FF - the Unicode Bengali block

/// The dari (U+0964), the Bangla sentence-final full stop.
///
/// Note that the dari lives in the Devanagari block, not the Bengali one,
/// so `is_bangla(DARI)` is false.
pub const DARI: char = '\u{0964}';

/// Returns true if the character belongs to the Bengali Unicode block
/// (U+0980..=U+09FF).
#[inline]
pub const fn is_bangla(ch: char) -> bool {
    matches!(ch as u32, 0x0980..=0x09FF)
}

/// Returns true if the character is structural punctuation: a delimiter
/// retained by punctuation-keeping extraction.
///
/// The set is fixed: `, ; । ? ! : ( ) { } [ ] -` and the newline.
#[inline]
pub const fn is_structural_punct(ch: char) -> bool {
    matches!(
        ch,
        ',' | ';' | DARI | '?' | '!' | ':' | '(' | ')' | '{' | '}' | '[' | ']' | '-' | '\n'
    )
}

/// Returns true if the character ends a sentence: the dari, `?`, or `!`.
#[inline]
pub const fn is_terminator(ch: char) -> bool {
    matches!(ch, DARI | '?' | '!')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bangla_block_boundaries() {
        assert!(is_bangla('\u{0980}'));
        assert!(is_bangla('\u{09FF}'));
        assert!(is_bangla('আ'));
        assert!(is_bangla('৯'));

        // One codepoint outside each edge of the block
        assert!(!is_bangla('\u{097F}'));
        assert!(!is_bangla('\u{0A00}'));
        assert!(!is_bangla('a'));
        assert!(!is_bangla(' '));
    }

    #[test]
    fn dari_is_not_in_bengali_block() {
        assert!(!is_bangla(DARI));
        assert!(is_structural_punct(DARI));
        assert!(is_terminator(DARI));
    }

    #[test]
    fn structural_punct_membership() {
        for ch in [
            ',', ';', DARI, '?', '!', ':', '(', ')', '{', '}', '[', ']', '-', '\n',
        ] {
            assert!(is_structural_punct(ch), "{ch:?} should be structural");
        }

        assert!(!is_structural_punct('.'));
        assert!(!is_structural_punct(' '));
        assert!(!is_structural_punct('"'));
        assert!(!is_structural_punct('আ'));
    }

    #[test]
    fn terminator_membership() {
        assert!(is_terminator('?'));
        assert!(is_terminator('!'));
        assert!(!is_terminator(','));
        assert!(!is_terminator('\n'));
        assert!(!is_terminator('.'));
    }
}
