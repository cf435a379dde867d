/*! Conversion of verse collections to the app format.

Verses are gathered from one or more documents ([load_range]), converted to the app's naming
([convert_verse], [convert_word]) and rendered as a source literal ([emit]).
!*/
mod literal;
mod recitation;
mod record;

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};

use crate::error::Error;
use crate::io;
use crate::types::VerseRecord;

pub use literal::{emit, quote, SurahLiteral};
pub use recitation::{derive_media_url, RecitationSource, DEFAULT_HOST, DEFAULT_RECITER};
pub use record::{
    convert_verse, convert_word, Analysis, ConvertedSurah, ConvertedVerse, ConvertedWord, NO_ROOT,
};

/// A document to take verses from, optionally keeping only verses up to `upper_bound` (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSource {
    pub path: PathBuf,
    pub upper_bound: Option<u32>,
}

impl RangeSource {
    pub fn new(path: impl Into<PathBuf>, upper_bound: Option<u32>) -> Self {
        Self {
            path: path.into(),
            upper_bound,
        }
    }
}

/// Parses `path` or `path:bound`.
/// A suffix that isn't a number is considered part of the path.
impl FromStr for RangeSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty source path".to_string().into());
        }
        if let Some((path, bound)) = s.rsplit_once(':') {
            if let Ok(bound) = bound.parse::<u32>() {
                if path.is_empty() {
                    return Err(format!("no path before bound in {:?}", s).into());
                }
                return Ok(Self::new(path, Some(bound)));
            }
        }
        Ok(Self::new(s, None))
    }
}

/// Load verses from `sources`, in order.
///
/// Verses of a bounded source are kept only if their number is lower than or equal to the bound.
/// Verses whose number was already provided by an earlier source are skipped,
/// so that overlapping partial documents yield a contiguous range.
/// Within a single source, every verse is kept.
pub fn load_range(sources: &[RangeSource]) -> Result<Vec<VerseRecord>, Error> {
    let mut verses: Vec<VerseRecord> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();

    for source in sources {
        let collection = io::load(&source.path)?;
        let before = verses.len();
        for verse in collection.into_verses() {
            if let Some(bound) = source.upper_bound {
                if verse.verse > bound {
                    continue;
                }
            }
            if seen.contains(&verse.verse) {
                warn!(
                    "[{:?}] verse {} already provided by an earlier source, skipping",
                    source.path, verse.verse
                );
                continue;
            }
            verses.push(verse);
        }
        seen.extend(verses[before..].iter().map(|v| v.verse));
        info!(
            "[{:?}] kept {} verses (bound: {:?})",
            source.path,
            verses.len() - before,
            source.upper_bound
        );
    }

    Ok(verses)
}

/// Convert `verses` of chapter `chapter` named `name`.
pub fn convert(
    verses: &[VerseRecord],
    chapter: u32,
    name: &str,
    recitation: &RecitationSource,
) -> ConvertedSurah {
    ConvertedSurah {
        surah_number: chapter,
        surah_name: name.to_string(),
        ayat: verses
            .iter()
            .map(|v| convert_verse(v, chapter, recitation))
            .collect(),
    }
}

/// Load `sources` and render them as a chapter literal.
///
/// Nothing is rendered if any source fails to load.
pub fn convert_files(
    sources: &[RangeSource],
    chapter: u32,
    name: &str,
    recitation: &RecitationSource,
) -> Result<String, Error> {
    let verses = load_range(sources)?;
    let surah = convert(&verses, chapter, name, recitation);
    Ok(emit(&surah.ayat, surah.surah_number, &surah.surah_name))
}
