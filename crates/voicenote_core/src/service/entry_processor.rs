//! Entry batch processing use-case.
//!
//! # Responsibility
//! - Tally user tags across a batch.
//! - Detect one task per entry and feed its keywords into a batch tally.
//! - Rank keywords and assemble the batch report.
//!
//! # Invariants
//! - Processing is total and deterministic; the same batch always yields an
//!   identical report, ordering included.
//! - `tasks` follow entry order.
//! - Keyword ranking is a stable sort on count; ties keep first-seen order.
//! - Transcript text is never written to logs.

use crate::extract::keywords::extract_keywords;
use crate::extract::task::extract_task;
use crate::model::entry::VoiceEntry;
use crate::model::report::{KeywordCount, ProcessedResult};
use crate::model::tally::OrderedTally;
use log::debug;

/// Default number of ranked keywords kept in a report.
pub const TOP_KEYWORD_LIMIT: usize = 20;
const KEYWORD_LIMIT_MAX: usize = 100;

/// Batch processor with a configurable keyword cut-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryProcessor {
    keyword_limit: usize,
}

impl Default for EntryProcessor {
    fn default() -> Self {
        Self {
            keyword_limit: TOP_KEYWORD_LIMIT,
        }
    }
}

impl EntryProcessor {
    /// Creates a processor with the default keyword limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with a normalized keyword limit.
    ///
    /// See [`normalize_keyword_limit`].
    pub fn with_keyword_limit(limit: Option<usize>) -> Self {
        Self {
            keyword_limit: normalize_keyword_limit(limit),
        }
    }

    /// Effective keyword limit.
    pub fn keyword_limit(&self) -> usize {
        self.keyword_limit
    }

    /// Processes one batch of entries into a report.
    pub fn process(&self, entries: &[VoiceEntry]) -> ProcessedResult {
        let mut tag_frequencies = OrderedTally::new();
        let mut keyword_tally = OrderedTally::new();
        let mut tasks = Vec::new();

        for entry in entries {
            for tag in &entry.tags_user {
                tag_frequencies.increment(tag);
            }

            let Some(task) = extract_task(entry.effective_transcript()) else {
                continue;
            };
            for keyword in extract_keywords(&task.task_text) {
                keyword_tally.increment(&keyword);
            }
            tasks.push(task);
        }

        let top_keywords = keyword_tally
            .ranked(self.keyword_limit)
            .into_iter()
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.to_string(),
                count,
            })
            .collect::<Vec<_>>();

        debug!(
            "event=process_entries module=processor status=ok entries={} tags={} tasks={} keywords={}",
            entries.len(),
            tag_frequencies.len(),
            tasks.len(),
            top_keywords.len()
        );

        ProcessedResult {
            summary: format!("Processed {} entries", entries.len()),
            tag_frequencies,
            tasks,
            top_keywords,
        }
    }
}

/// Processes a batch with the default keyword limit.
pub fn process_entries(entries: &[VoiceEntry]) -> ProcessedResult {
    EntryProcessor::default().process(entries)
}

/// Normalizes a requested keyword limit.
///
/// - `None` or `0` -> `TOP_KEYWORD_LIMIT`
/// - values above the maximum are clamped to it
pub fn normalize_keyword_limit(limit: Option<usize>) -> usize {
    match limit {
        Some(0) | None => TOP_KEYWORD_LIMIT,
        Some(value) if value > KEYWORD_LIMIT_MAX => KEYWORD_LIMIT_MAX,
        Some(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_keyword_limit, EntryProcessor, TOP_KEYWORD_LIMIT};
    use crate::model::entry::VoiceEntry;

    #[test]
    fn normalize_keyword_limit_applies_default_and_cap() {
        assert_eq!(normalize_keyword_limit(None), TOP_KEYWORD_LIMIT);
        assert_eq!(normalize_keyword_limit(Some(0)), TOP_KEYWORD_LIMIT);
        assert_eq!(normalize_keyword_limit(Some(5)), 5);
        assert_eq!(normalize_keyword_limit(Some(500)), 100);
    }

    #[test]
    fn custom_limit_truncates_ranking() {
        let entries = vec![VoiceEntry::new("1").with_transcript_user("email alpha beta gamma delta")];
        let processor = EntryProcessor::with_keyword_limit(Some(2));
        assert_eq!(processor.keyword_limit(), 2);
        assert_eq!(EntryProcessor::new().keyword_limit(), TOP_KEYWORD_LIMIT);

        let result = processor.process(&entries);
        let keywords = result
            .top_keywords
            .iter()
            .map(|kw| kw.keyword.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keywords, vec!["email", "alpha"]);
    }

    #[test]
    fn model_tags_are_not_tallied() {
        let mut entry = VoiceEntry::new("1").with_tags(["work"]);
        entry.tags_model = vec!["auto".to_string()];
        let result = EntryProcessor::new().process(&[entry]);
        assert_eq!(result.tag_frequencies.get("work"), Some(1));
        assert_eq!(result.tag_frequencies.get("auto"), None);
    }
}
