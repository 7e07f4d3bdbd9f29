//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate extractors into batch-level reports.
//! - Keep callers decoupled from extraction details.

pub mod entry_processor;
