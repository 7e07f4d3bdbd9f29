//! Derived records returned by entry processing.
//!
//! # Responsibility
//! - Define detected task, keyword and aggregate result shapes.
//! - Fix the wire names consumed by display/persistence callers.
//!
//! # Invariants
//! - Detected tasks always start as `TaskStatus::Todo`.
//! - An absent due date is `None` and is omitted on the wire, never `""`.
//! - `KeywordCount::count` is >= 1.

use crate::extract::due_date::extract_due_date;
use crate::model::tally::OrderedTally;
use serde::{Deserialize, Serialize};

/// Task lifecycle state. Detection only ever produces `Todo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
}

/// Actionable item detected in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Matched transcript span, trigger phrase included, trimmed.
    pub task_text: String,
    /// Due-date hint such as `tomorrow` or `next week`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a `todo` task and derives its due-date hint from the text.
    pub fn todo(task_text: impl Into<String>) -> Self {
        let task_text = task_text.into();
        let due_date = extract_due_date(&task_text).map(str::to_string);
        Self {
            task_text,
            due_date,
            status: TaskStatus::Todo,
        }
    }
}

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Aggregate report over one entry batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResult {
    /// `Processed {n} entries`.
    pub summary: String,
    /// Exact user tag -> occurrence count, in first-seen order.
    pub tag_frequencies: OrderedTally,
    /// Detected tasks in entry order.
    pub tasks: Vec<Task>,
    /// Keywords ranked by count descending.
    pub top_keywords: Vec<KeywordCount>,
}

impl ProcessedResult {
    /// Serializes the report as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
