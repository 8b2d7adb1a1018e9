use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotodateError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Metadata errors
    #[error("Exiftool error: {0}")]
    Exiftool(String),

    #[error("Failed to extract metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },
}

/// A capture date that could not be split into year, month and day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("no time portion in date {0:?}")]
    MissingTime(String),

    #[error("no delimiter splits {0:?} into year, month and day")]
    NoDelimiter(String),

    #[error("non-numeric date component in {0:?}")]
    NonNumeric(String),
}

/// Why a single planned move did not happen.
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} already exists")]
    DestinationExists(PathBuf),

    #[error("move failed: {0}")]
    Move(#[source] std::io::Error),

    #[error("copied to {copy} but the original could not be removed: {source}")]
    SourceNotRemoved {
        copy: PathBuf,
        source: std::io::Error,
    },
}

/// Details about files that failed to move.
#[derive(Debug)]
pub struct FailedMoves {
    pub failures: Vec<FailedMove>,
}

#[derive(Debug)]
pub struct FailedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: MoveError,
}

impl std::fmt::Display for FailedMoves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "  {} -> {}: {}",
                failure.source.display(),
                failure.destination.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl FailedMoves {
    pub fn new() -> Self {
        Self { failures: Vec::new() }
    }

    pub fn add(&mut self, source: PathBuf, destination: PathBuf, error: MoveError) {
        self.failures.push(FailedMove {
            source,
            destination,
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FailedMove> {
        self.failures.iter()
    }
}

impl Default for FailedMoves {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for photodate operations.
pub type Result<T> = std::result::Result<T, PhotodateError>;
