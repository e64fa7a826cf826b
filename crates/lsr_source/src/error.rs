//! Errors raised before reading starts.
//!
//! Once a reader exists, end of input and read failures both surface as
//! `None`; only acquiring the byte source can fail loudly.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to acquire a byte source.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be opened.
    Open { path: PathBuf, source: io::Error },
}

impl SourceError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        SourceError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the input that failed.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Open { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            SourceError::Open { source, .. } => source.kind(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Open { path, source } => {
                write!(f, "cannot open '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Open { source, .. } => Some(source),
        }
    }
}
