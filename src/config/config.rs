use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::diff::region::Marker;
use crate::error::{SpliceError, SpliceResult};
use crate::file::operations::read_text;

/// Where the replacement text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Inline(String),
    File(PathBuf),
}

impl Payload {
    pub fn resolve(&self) -> SpliceResult<String> {
        match self {
            Payload::Inline(text) => Ok(text.clone()),
            Payload::File(path) => read_text(path),
        }
    }
}

/// One complete set of splice inputs
#[derive(Debug, Clone)]
pub struct SpliceJob {
    pub path: PathBuf,
    pub start_marker: Marker,
    pub end_marker: Marker,
    pub payload: Payload,
}

/// Partially specified job, as read from a job file or the command line.
///
/// Fields left `None` can be filled in by a later layer via [`JobSpec::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSpec {
    /// File to rewrite
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Substring identifying the first line of the region
    #[serde(default)]
    pub start_marker: Option<String>,

    /// Substring identifying the line just after the region
    #[serde(default)]
    pub end_marker: Option<String>,

    /// Inline replacement text
    #[serde(default)]
    pub payload: Option<String>,

    /// File holding the replacement text
    #[serde(default)]
    pub payload_file: Option<PathBuf>,
}

impl JobSpec {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    ///
    /// An override for either payload source replaces both, so a job file's
    /// `payload_file` never conflicts with `--payload` from the command line.
    pub fn merge(self, overrides: JobSpec) -> JobSpec {
        let payload_overridden = overrides.payload.is_some() || overrides.payload_file.is_some();
        let (payload, payload_file) = if payload_overridden {
            (overrides.payload, overrides.payload_file)
        } else {
            (self.payload, self.payload_file)
        };

        JobSpec {
            path: overrides.path.or(self.path),
            start_marker: overrides.start_marker.or(self.start_marker),
            end_marker: overrides.end_marker.or(self.end_marker),
            payload,
            payload_file,
        }
    }

    /// Resolve relative paths against `base`
    pub fn relative_to(mut self, base: &Path) -> JobSpec {
        self.path = self.path.map(|p| rebase(base, p));
        self.payload_file = self.payload_file.map(|p| rebase(base, p));
        self
    }

    /// Validate and build the final job
    pub fn into_job(self) -> SpliceResult<SpliceJob> {
        let path = self
            .path
            .ok_or_else(|| SpliceError::invalid_job("missing target file path"))?;
        let start_marker = self
            .start_marker
            .ok_or_else(|| SpliceError::invalid_job("missing start marker"))
            .and_then(Marker::new)?;
        let end_marker = self
            .end_marker
            .ok_or_else(|| SpliceError::invalid_job("missing end marker"))
            .and_then(Marker::new)?;

        let payload = match (self.payload, self.payload_file) {
            (Some(text), None) => Payload::Inline(text),
            (None, Some(file)) => Payload::File(file),
            (Some(_), Some(_)) => {
                return Err(SpliceError::invalid_job(
                    "payload and payload_file are mutually exclusive",
                ))
            }
            (None, None) => return Err(SpliceError::invalid_job("missing payload")),
        };

        Ok(SpliceJob {
            path,
            start_marker,
            end_marker,
            payload,
        })
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
