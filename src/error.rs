//! Error enum
use std::fmt;
use std::path::PathBuf;

use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A PDF could not be opened, parsed or read.
    Pdf {
        path: PathBuf,
        source: lopdf::Error,
    },
    Serde(serde_json::Error),
    /// Input directory does not exist.
    MissingSource(PathBuf),
    /// Input directory holds no `.pdf` file.
    NoDocuments(PathBuf),
    /// The language identifier could not classify the provided text.
    Unidentified,
    LanguageTag(LanguageTagParseError),
}

impl Error {
    pub(crate) fn pdf(path: impl Into<PathBuf>, source: lopdf::Error) -> Self {
        Self::Pdf {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Pdf { path, source } => {
                write!(f, "could not read PDF {}: {source}", path.display())
            }
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::MissingSource(p) => write!(f, "the directory {} does not exist", p.display()),
            Error::NoDocuments(p) => write!(f, "no PDF files found in {}", p.display()),
            Error::Unidentified => write!(f, "could not identify language"),
            Error::LanguageTag(e) => write!(f, "invalid language tag: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Pdf { source, .. } => Some(source),
            Error::Serde(e) => Some(e),
            Error::LanguageTag(e) => Some(e),
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

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}
