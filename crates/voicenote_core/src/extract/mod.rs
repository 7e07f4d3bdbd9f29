//! Heuristic extractors applied to entry transcripts.
//!
//! # Responsibility
//! - Detect actionable task spans via ordered trigger phrases.
//! - Derive due-date hints and keyword tokens from detected spans.
//!
//! # Invariants
//! - Extractors are pure and total; unmatched input yields absence.
//! - Whitespace means exactly the `TRANSCRIPT_WHITESPACE` set everywhere:
//!   trigger separators, trimming and keyword splitting. U+0085 is not in it,
//!   U+FEFF is.

pub mod due_date;
pub mod keywords;
pub mod task;

/// Transcript whitespace as a regex class body (no brackets).
pub(crate) const TRANSCRIPT_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Char-level twin of `TRANSCRIPT_WHITESPACE`.
pub(crate) fn is_transcript_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::{is_transcript_whitespace, TRANSCRIPT_WHITESPACE};
    use regex::Regex;

    #[test]
    fn class_and_predicate_agree() {
        let class = Regex::new(&format!("^[{TRANSCRIPT_WHITESPACE}]$")).unwrap();
        for code in 0_u32..=0x3000 {
            let Some(c) = char::from_u32(code) else {
                continue;
            };
            assert_eq!(
                class.is_match(c.encode_utf8(&mut [0; 4])),
                is_transcript_whitespace(c),
                "mismatch at U+{code:04X}"
            );
        }
        assert!(is_transcript_whitespace('\u{FEFF}'));
        assert!(!is_transcript_whitespace('\u{85}'));
    }
}
