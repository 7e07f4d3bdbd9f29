//! Trigger-phrase task detection.
//!
//! # Responsibility
//! - Detect one actionable span per transcript.
//! - Attach a due-date hint to the detected span.
//!
//! # Invariants
//! - Patterns are evaluated in `TASK_TRIGGERS` order; the first one that
//!   matches anywhere in the transcript wins.
//! - A capture starts at the trigger phrase and stops before the first `.`
//!   or at end of text. It never crosses a line break.
//! - Captured text keeps the transcript's original casing.
//! - Trigger letters match ASCII case-insensitively only; `ſ` is not `s`.

use crate::extract::{is_transcript_whitespace, TRANSCRIPT_WHITESPACE};
use crate::model::report::Task;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trigger phrases in priority order.
pub const TASK_TRIGGERS: &[&str] = &[
    "need to",
    "have to",
    "remember to",
    "don't forget to",
    "should",
    "must",
    "schedule",
    "email",
    "call",
];

static TASK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TASK_TRIGGERS
        .iter()
        .map(|trigger| {
            let pattern = format!(
                r"({}[{TRANSCRIPT_WHITESPACE}][^\r\n\u{{2028}}\u{{2029}}]+?)(?:\.|$)",
                ascii_case_insensitive(trigger)
            );
            Regex::new(&pattern).expect("valid task pattern")
        })
        .collect()
});

fn ascii_case_insensitive(trigger: &str) -> String {
    trigger
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                format!("[{}{}]", c.to_ascii_lowercase(), c.to_ascii_uppercase())
            } else {
                regex::escape(c.encode_utf8(&mut [0; 4]))
            }
        })
        .collect()
}

/// Returns the matched task span for `transcript`, trimmed.
///
/// Returns `None` when no trigger phrase matches.
pub fn match_task_text(transcript: &str) -> Option<&str> {
    TASK_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(transcript)
            .and_then(|caps| caps.get(1))
            .map(|span| span.as_str().trim_matches(is_transcript_whitespace))
    })
}

/// Detects a `todo` task in `transcript`.
pub fn extract_task(transcript: &str) -> Option<Task> {
    match_task_text(transcript).map(Task::todo)
}
