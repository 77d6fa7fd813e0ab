use std::{error::Error, fmt::Display, io, path::PathBuf, string::FromUtf8Error};

use m3u_filter_rs::KeywordError;

#[derive(Debug)]
pub enum FilterJobError {
    /// Input missing or unreadable, nothing was written
    Read(PathBuf, io::Error),
    /// Input is not valid UTF-8, nothing was written
    Encoding(PathBuf, FromUtf8Error),
    /// Output could not be written, the previous output file is left as it was
    Write(PathBuf, io::Error),
    Keywords(KeywordError),
}

impl Display for FilterJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(path, e) => write!(f, "Cannot read {}: {}", path.display(), e),
            Self::Encoding(path, e) => write!(f, "{} is not UTF-8: {}", path.display(), e),
            Self::Write(path, e) => write!(f, "Cannot write {}: {}", path.display(), e),
            Self::Keywords(e) => e.fmt(f),
        }
    }
}

impl Error for FilterJobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(_, e) | Self::Write(_, e) => Some(e),
            Self::Encoding(_, e) => Some(e),
            Self::Keywords(e) => Some(e),
        }
    }
}

impl From<KeywordError> for FilterJobError {
    fn from(value: KeywordError) -> Self {
        Self::Keywords(value)
    }
}
