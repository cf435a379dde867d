use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GrammarAnnotation;

/// A single word of a verse, in left-to-right presentation order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(default)]
    pub grammar: GrammarAnnotation,
    /// Keys outside of the known ones, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordRecord {
    pub fn new(
        arabic: &str,
        transliteration: &str,
        translation: &str,
        grammar: GrammarAnnotation,
    ) -> Self {
        Self {
            arabic: arabic.to_string(),
            transliteration: transliteration.to_string(),
            translation: translation.to_string(),
            grammar,
            extra: Map::new(),
        }
    }

    /// Word with only a type and a practical note in its annotation.
    pub fn simple(
        arabic: &str,
        transliteration: &str,
        translation: &str,
        kind: &str,
        practical: &str,
    ) -> Self {
        Self::new(
            arabic,
            transliteration,
            translation,
            GrammarAnnotation::typed(kind, practical),
        )
    }
}

/// A verse with its word-by-word breakdown.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub verse: u32,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(default)]
    pub words: Vec<WordRecord>,
    /// Keys outside of the known ones (e.g. authoring notes), kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerseRecord {
    pub fn new(
        verse: u32,
        arabic: &str,
        transliteration: &str,
        translation: &str,
        words: Vec<WordRecord>,
    ) -> Self {
        Self {
            verse,
            arabic: arabic.to_string(),
            transliteration: transliteration.to_string(),
            translation: translation.to_string(),
            words,
            extra: Map::new(),
        }
    }
}
