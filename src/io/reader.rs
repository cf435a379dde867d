/*! Verse document loading.

Documents are usually `{"verses": [...]}` objects, but bare arrays of verses are accepted too,
since some partial documents were authored that way.
!*/
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::Error;
use crate::types::{VerseCollection, VerseRecord};

/// Key under which verses are stored in a collection document.
pub const VERSES_KEY: &str = "verses";

/// Load the collection stored at `path`.
///
/// Fails with [Error::NotFound] if there's nothing at `path`,
/// [Error::Parse] on malformed JSON or records, and [Error::Schema] on an unexpected top-level shape.
pub fn load(path: &Path) -> Result<VerseCollection, Error> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let collection = from_reader(BufReader::new(f), path)?;
    debug!("loaded {} verses from {:?}", collection.len(), path);
    Ok(collection)
}

/// Parse a collection from `reader`. `origin` is only used in error reporting.
pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<VerseCollection, Error> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| Error::parse(origin, e))?;
    from_value(document, origin)
}

fn from_value(document: Value, origin: &Path) -> Result<VerseCollection, Error> {
    let collection = match document {
        Value::Object(map) => {
            match map.get(VERSES_KEY) {
                None => {
                    return Err(Error::schema(origin, format!("missing `{}` key", VERSES_KEY)))
                }
                Some(verses) if !verses.is_array() => {
                    return Err(Error::schema(
                        origin,
                        format!("`{}` is {}, not an array", VERSES_KEY, kind(verses)),
                    ))
                }
                Some(_) => (),
            }
            // keeps the other top-level keys along with the verses
            serde_json::from_value::<VerseCollection>(Value::Object(map))
                .map_err(|e| Error::parse(origin, e))?
        }
        array @ Value::Array(_) => {
            let verses: Vec<VerseRecord> =
                serde_json::from_value(array).map_err(|e| Error::parse(origin, e))?;
            VerseCollection::new(verses)
        }
        other => {
            return Err(Error::schema(
                origin,
                format!("expected an object or an array, found {}", kind(&other)),
            ))
        }
    };

    if collection.verses().iter().any(|v| v.verse == 0) {
        return Err(Error::schema(origin, "verse numbers start at 1, found 0"));
    }

    Ok(collection)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
