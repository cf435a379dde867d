//! Verse dataset types.
//!
//! These mirror the on-disk documents: a [VerseCollection] holds [VerseRecord]s,
//! each of them holding [WordRecord]s annotated with a [GrammarAnnotation].
mod collection;
mod grammar;
mod verse;

pub use collection::VerseCollection;
pub use grammar::GrammarAnnotation;
pub use verse::{VerseRecord, WordRecord};
