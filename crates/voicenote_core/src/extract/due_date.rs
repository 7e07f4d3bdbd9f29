//! Due-date hint lookup over task text.
//!
//! # Invariants
//! - Matching is case-insensitive substring lookup; no date parsing.
//! - The first keyword in `DUE_DATE_KEYWORDS` order wins.

/// Recognized due-date phrases in priority order.
pub const DUE_DATE_KEYWORDS: &[&str] = &["tomorrow", "today", "next week", "friday", "end of month"];

/// Returns the first due-date phrase contained in `text`, if any.
pub fn extract_due_date(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    DUE_DATE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(*keyword))
}
