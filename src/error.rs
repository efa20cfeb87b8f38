use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which boundary of a region a marker delimits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Start => write!(f, "start"),
            MarkerKind::End => write!(f, "end"),
        }
    }
}

/// Main error type for region-splice
#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{which} marker {marker:?} not found in {}", .path.display())]
    MarkerNotFound {
        which: MarkerKind,
        marker: String,
        path: PathBuf,
    },

    #[error("Invalid region: end marker at line {} is not after start marker at line {}", .end + 1, .start + 1)]
    InvalidRegion { start: usize, end: usize },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid job: {message}")]
    InvalidJob { message: String },

    #[error("File is not valid UTF-8: {}", .path.display())]
    Encoding { path: PathBuf },
}

impl SpliceError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new marker-not-found error
    pub fn marker_not_found(
        which: MarkerKind,
        marker: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::MarkerNotFound {
            which,
            marker: marker.into(),
            path: path.into(),
        }
    }

    pub fn invalid_region(start: usize, end: usize) -> Self {
        Self::InvalidRegion { start, end }
    }

    /// Create a new invalid job error
    pub fn invalid_job(message: impl Into<String>) -> Self {
        Self::InvalidJob {
            message: message.into(),
        }
    }

    pub fn encoding(path: impl Into<PathBuf>) -> Self {
        Self::Encoding { path: path.into() }
    }

    /// Short machine-friendly name of the error kind, used in log fields
    pub fn kind_name(&self) -> &'static str {
        match self {
            SpliceError::FileNotFound { .. } => "file_not_found",
            SpliceError::MarkerNotFound { .. } => "marker_not_found",
            SpliceError::InvalidRegion { .. } => "invalid_region",
            SpliceError::Io { .. } => "io_error",
            SpliceError::InvalidJob { .. } => "invalid_job",
            SpliceError::Encoding { .. } => "encoding_error",
        }
    }
}

/// Result type alias for region-splice operations
pub type SpliceResult<T> = std::result::Result<T, SpliceError>;
