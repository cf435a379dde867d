//! Verse document saving.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::Error;
use crate::types::VerseCollection;

/// Overwrite `path` with `collection`.
///
/// Output is pretty-printed with a 2-space indent and non-ASCII text is kept as-is.
/// The file is truncated before writing: a failure while writing leaves a partial document.
/// Use [save_atomic] to avoid that.
pub fn save(collection: &VerseCollection, path: &Path) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    write_collection(&mut w, collection)?;
    w.flush()?;
    debug!("wrote {} verses to {:?}", collection.len(), path);
    Ok(())
}

/// Write `collection` to a temporary file next to `path`, then rename it over `path`.
pub fn save_atomic(collection: &VerseCollection, path: &Path) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        write_collection(&mut w, collection)?;
        w.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    debug!("atomically wrote {} verses to {:?}", collection.len(), path);
    Ok(())
}

fn write_collection<W: Write>(w: &mut W, collection: &VerseCollection) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *w, collection)?;
    w.write_all(b"\n")?;
    Ok(())
}
