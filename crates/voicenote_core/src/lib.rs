//! Core analysis for voice-journal entries.
//! Turns an entry batch into tag counts, detected tasks and ranked keywords.

pub mod extract;
pub mod logging;
pub mod model;
pub mod service;

pub use extract::due_date::extract_due_date;
pub use extract::keywords::extract_keywords;
pub use extract::task::extract_task;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{parse_entries, EntryId, EntryParseError, VoiceEntry};
pub use model::report::{KeywordCount, ProcessedResult, Task, TaskStatus};
pub use model::tally::OrderedTally;
pub use service::entry_processor::{process_entries, EntryProcessor, TOP_KEYWORD_LIMIT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
