/*! Appending verses to a canonical collection file.

The destination is loaded, every source is loaded, and only then is the destination rewritten:
a missing or malformed source never touches the destination.
!*/
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::io;
use crate::types::VerseCollection;

/// How the destination is handled.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppendOptions {
    /// Write through a temporary file and rename it over the destination.
    pub atomic: bool,
    /// Start from an empty collection when the destination does not exist.
    pub create: bool,
}

/// Outcome of an append run.
#[derive(Debug, PartialEq, Eq)]
pub struct AppendReport {
    pub added: usize,
    pub total: usize,
    pub span: Option<(u32, u32)>,
    pub duplicates: Vec<u32>,
}

impl AppendReport {
    fn new(added: usize, collection: &VerseCollection) -> Self {
        Self {
            added,
            total: collection.len(),
            span: collection.span(),
            duplicates: collection.duplicates(),
        }
    }
}

/// Append every verse of `srcs` (in order) to the collection at `dst`, and save it back to `dst`.
pub fn append_files(
    dst: &Path,
    srcs: &[PathBuf],
    options: AppendOptions,
) -> Result<AppendReport, Error> {
    let collection = match io::load(dst) {
        Ok(c) => c,
        Err(Error::NotFound(_)) if options.create => {
            info!("{:?} does not exist, starting from an empty collection", dst);
            VerseCollection::default()
        }
        Err(e) => return Err(e),
    };

    let mut new_records = Vec::new();
    for src in srcs {
        let c = io::load(src)?;
        info!("[{:?}] {} verses to append", src, c.len());
        new_records.extend(c.into_verses());
    }

    let added = new_records.len();
    let collection = collection.append(new_records);
    let report = AppendReport::new(added, &collection);

    if !report.duplicates.is_empty() {
        warn!(
            "{:?}: verse numbers appearing more than once: {:?}",
            dst, report.duplicates
        );
    }

    if options.atomic {
        io::save_atomic(&collection, dst)?;
    } else {
        io::save(&collection, dst)?;
    }

    info!("added {} verses, total is now {}", report.added, report.total);
    if let Some((first, last)) = report.span {
        info!("verses completed: {} to {}", first, last);
    }
    Ok(report)
}
