//! Keyword tokens from detected task text.
//!
//! # Invariants
//! - Tokens contain only `a-z`; digits and punctuation are deleted, not
//!   treated as separators.
//! - Stopwords are filtered after lower-casing, so source casing never
//!   lets one through.

use crate::extract::TRANSCRIPT_WHITESPACE;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// English function words excluded from keyword tallies.
pub const STOPWORDS: &[&str] = &[
    "the", "to", "and", "a", "of", "in", "for", "on", "with", "at", "by", "an", "be", "is", "are",
    "was", "were", "do", "does", "did", "this", "that", "it", "as", "from", "or", "have", "has",
    "had", "i", "you", "he", "she", "we", "they", "them", "me", "my", "your", "our", "their",
    "will", "would", "can", "could", "should", "shall", "may", "might", "must",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());
static NON_KEYWORD_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^a-z{TRANSCRIPT_WHITESPACE}]")).expect("valid keyword filter regex")
});
static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{TRANSCRIPT_WHITESPACE}]+")).expect("valid whitespace run regex")
});

/// Returns whether `word` is in the stopword set. Expects lower-case input.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Splits `text` into lower-case keyword tokens in source order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let letters_only = NON_KEYWORD_CHAR_RE.replace_all(&lower, "");
    WHITESPACE_RUN_RE
        .split(&letters_only)
        .filter(|word| !word.is_empty() && !is_stopword(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_keywords, is_stopword};

    #[test]
    fn drops_stopwords_even_when_capitalized() {
        assert_eq!(
            extract_keywords("I must call you and schedule with THE team"),
            vec!["call", "schedule", "team"]
        );
    }

    #[test]
    fn trigger_words_outside_stopwords_survive() {
        assert_eq!(
            extract_keywords("need to send the report to Alice tomorrow"),
            vec!["need", "send", "report", "alice", "tomorrow"]
        );
    }

    #[test]
    fn punctuation_and_digits_are_deleted_in_place() {
        assert_eq!(
            extract_keywords("don't forget to book room 42b, ok?"),
            vec!["dont", "forget", "book", "room", "b", "ok"]
        );
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(extract_keywords("email José über"), vec!["email", "jos", "ber"]);
    }

    #[test]
    fn byte_order_mark_splits_tokens() {
        assert_eq!(extract_keywords("call\u{FEFF}bob"), vec!["call", "bob"]);
    }

    #[test]
    fn next_line_char_is_deleted_not_split() {
        assert_eq!(extract_keywords("call\u{85}bob"), vec!["callbob"]);
    }

    #[test]
    fn empty_and_symbol_only_text_yield_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("!!! 123 ...").is_empty());
    }

    #[test]
    fn stopword_lookup_is_exact() {
        assert!(is_stopword("should"));
        assert!(!is_stopword("shoulder"));
    }
}
