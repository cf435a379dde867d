//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Source document does not exist.
    NotFound(PathBuf),
    /// Document is not well-formed JSON, or a record does not have the verse shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Top-level shape is wrong (e.g. no `verses` key).
    Schema { path: PathBuf, reason: String },
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
}

impl Error {
    /// Build a [Error::Parse] for a document located at `path`.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Build a [Error::Schema] for a document located at `path`.
    pub fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "{}: no such file", path.display()),
            Error::Parse { path, source } => {
                write!(f, "{}: malformed document: {}", path.display(), source)
            }
            Error::Schema { path, reason } => {
                write!(f, "{}: unexpected document shape: {}", path.display(), reason)
            }
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Error {
        Error::Io(e.error)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_path() {
        let e = Error::schema("surah-2.json", "missing `verses` key");
        assert_eq!(
            e.to_string(),
            "surah-2.json: unexpected document shape: missing `verses` key"
        );

        let e = Error::NotFound(PathBuf::from("nope.json"));
        assert_eq!(e.to_string(), "nope.json: no such file");
    }
}
