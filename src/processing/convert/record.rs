//! App-side shapes of verses and words.
use serde::Serialize;

use super::recitation::RecitationSource;
use crate::types::{VerseRecord, WordRecord};

/// Value of [Analysis::root] when a word has no root.
pub const NO_ROOT: &str = "N/A";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(rename = "type")]
    pub kind: String,
    pub root: String,
    pub root_explanation: String,
    pub grammar: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ConvertedWord {
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub analysis: Analysis,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedVerse {
    pub ayah_number: u32,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub recitation_url: String,
    pub words: Vec<ConvertedWord>,
}

/// A whole chapter, as the app stores it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedSurah {
    pub surah_number: u32,
    pub surah_name: String,
    pub ayat: Vec<ConvertedVerse>,
}

/// Convert a word to its app shape.
///
/// `reason` is used twice: as the root explanation, and as the grammar explanation
/// when `practical` is missing or empty.
pub fn convert_word(word: &WordRecord) -> ConvertedWord {
    let g = &word.grammar;
    let grammar = g
        .practical()
        .or(g.reason.as_deref())
        .unwrap_or_default()
        .to_string();

    ConvertedWord {
        arabic: word.arabic.clone(),
        transliteration: word.transliteration.clone(),
        translation: word.translation.clone(),
        analysis: Analysis {
            kind: g.kind.clone().unwrap_or_default(),
            root: g.root.clone().unwrap_or_else(|| NO_ROOT.to_string()),
            root_explanation: g.reason.clone().unwrap_or_default(),
            grammar,
        },
    }
}

/// Convert a verse of chapter `chapter` to its app shape, keeping word order.
pub fn convert_verse(
    verse: &VerseRecord,
    chapter: u32,
    recitation: &RecitationSource,
) -> ConvertedVerse {
    ConvertedVerse {
        ayah_number: verse.verse,
        arabic: verse.arabic.clone(),
        transliteration: verse.transliteration.clone(),
        translation: verse.translation.clone(),
        recitation_url: recitation.media_url(verse.verse, chapter),
        words: verse.words.iter().map(convert_word).collect(),
    }
}
