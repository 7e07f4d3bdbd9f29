//! Input and output records for journal entry processing.
//!
//! # Responsibility
//! - Define the voice entry input shape.
//! - Define derived task/keyword/report shapes and their wire names.
//!
//! # Invariants
//! - Every record is constructed and discarded within one processing call.

pub mod entry;
pub mod report;
pub mod tally;
