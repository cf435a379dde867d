use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::VerseRecord;

/// An ordered sequence of verses, persisted as `{"verses": [...]}`.
///
/// Verse numbers are expected to be unique and increasing but this is never enforced:
/// insertion order is kept as-is.
/// Other top-level keys (chapter metadata) are carried along untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct VerseCollection {
    #[serde(flatten)]
    extra: Map<String, Value>,
    verses: Vec<VerseRecord>,
}

impl VerseCollection {
    pub fn new(verses: Vec<VerseRecord>) -> Self {
        Self {
            extra: Map::new(),
            verses,
        }
    }

    /// Get a reference to the top-level keys other than `verses`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Append `records` after the existing ones, in order.
    ///
    /// This is a plain concatenation: verses that share a number with an existing one are kept.
    pub fn append(mut self, records: Vec<VerseRecord>) -> Self {
        self.verses.extend(records);
        self
    }

    /// Get a reference to the collection's verses.
    pub fn verses(&self) -> &[VerseRecord] {
        self.verses.as_ref()
    }

    pub fn into_verses(self) -> Vec<VerseRecord> {
        self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verse numbers of the first and last records.
    pub fn span(&self) -> Option<(u32, u32)> {
        match (self.verses.first(), self.verses.last()) {
            (Some(first), Some(last)) => Some((first.verse, last.verse)),
            _ => None,
        }
    }

    /// Verse numbers that appear more than once, in order of their second occurrence.
    pub fn duplicates(&self) -> Vec<u32> {
        self.verses.iter().map(|v| v.verse).duplicates().collect()
    }

    /// Number of verses still missing until `expected_last`, counting from the last record.
    pub fn remaining(&self, expected_last: u32) -> u32 {
        match self.span() {
            Some((_, last)) => expected_last.saturating_sub(last),
            None => expected_last,
        }
    }
}

impl From<Vec<VerseRecord>> for VerseCollection {
    fn from(verses: Vec<VerseRecord>) -> Self {
        Self::new(verses)
    }
}
