//! Voice-journal entry model.
//!
//! # Responsibility
//! - Define the input record consumed by the entry processor.
//! - Resolve the effective transcript used for task detection.
//! - Decode entry batches from JSON.
//!
//! # Invariants
//! - Only `id` is required on the wire; every other field defaults, whether
//!   it is missing or explicitly `null`.
//! - `effective_transcript` prefers `transcript_user`, then `transcript_raw`,
//!   then the empty string. Empty strings count as absent.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque entry identifier supplied by the ingestion layer.
pub type EntryId = String;

/// One voice-journal record.
///
/// Most fields are carried through untouched; processing only reads
/// `tags_user`, `transcript_user` and `transcript_raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceEntry {
    pub id: EntryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Transcript as produced by speech recognition.
    #[serde(default)]
    pub transcript_raw: Option<String>,
    /// Transcript after user edits. Preferred over `transcript_raw`.
    #[serde(default)]
    pub transcript_user: Option<String>,
    #[serde(default)]
    pub language_detected: Option<String>,
    #[serde(default)]
    pub language_rendered: Option<String>,
    /// Model-suggested tags. Never tallied.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_model: Vec<String>,
    /// User-applied tags, tallied exactly as written.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_user: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// ISO-8601 timestamp string as delivered upstream.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default)]
    pub emotion_score_score: Option<f64>,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl VoiceEntry {
    /// Creates an entry with the given id and every other field empty.
    pub fn new(id: impl Into<EntryId>) -> Self {
        Self {
            id: id.into(),
            user_id: String::new(),
            audio_url: None,
            transcript_raw: None,
            transcript_user: None,
            language_detected: None,
            language_rendered: None,
            tags_model: Vec::new(),
            tags_user: Vec::new(),
            category: None,
            created_at: String::new(),
            updated_at: String::new(),
            emotion_score_score: None,
            embedding: None,
        }
    }

    pub fn with_transcript_user(mut self, text: impl Into<String>) -> Self {
        self.transcript_user = Some(text.into());
        self
    }

    pub fn with_transcript_raw(mut self, text: impl Into<String>) -> Self {
        self.transcript_raw = Some(text.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_user = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the text analyzed for this entry.
    pub fn effective_transcript(&self) -> &str {
        non_empty(self.transcript_user.as_deref())
            .or_else(|| non_empty(self.transcript_raw.as_deref()))
            .unwrap_or("")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Error returned when an entry batch cannot be decoded.
#[derive(Debug)]
pub enum EntryParseError {
    /// Top-level JSON value is valid but not an array.
    NotAnArray,
    /// JSON syntax or record shape error.
    Json(serde_json::Error),
}

impl Display for EntryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "entry batch must be a JSON array"),
            Self::Json(err) => write!(f, "invalid entry batch: {err}"),
        }
    }
}

impl Error for EntryParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotAnArray => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for EntryParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes a JSON array of entries.
///
/// # Errors
/// - `NotAnArray` when the document is valid JSON of another shape.
/// - `Json` on syntax errors or records missing `id`.
pub fn parse_entries(json: &str) -> Result<Vec<VoiceEntry>, EntryParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(EntryParseError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}
