//! Insertion-ordered string counter.
//!
//! # Invariants
//! - Keys iterate in first-seen order.
//! - Every stored count is >= 1.
//! - `ranked` is a stable sort on count only, so ties keep first-seen order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Counter keyed by exact string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl OrderedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`, inserting it at the end when unseen.
    pub fn increment(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            self.counts[slot].1 += 1;
            return;
        }
        self.index.insert(key.to_string(), self.counts.len());
        self.counts.push((key.to_string(), 1));
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&slot| self.counts[slot].1)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// Returns at most `limit` pairs sorted by count descending.
    pub fn ranked(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked.truncate(limit);
        ranked
    }
}

impl Serialize for OrderedTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
