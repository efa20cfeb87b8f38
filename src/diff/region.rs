use std::fmt;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

use crate::error::{MarkerKind, SpliceError, SpliceResult};

/// Literal substring identifying a boundary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    text: String,
}

impl Marker {
    /// Create a marker, rejecting empty text since it would match every line
    pub fn new(text: impl Into<String>) -> SpliceResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(SpliceError::invalid_job("marker must not be empty"));
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Containment match, not equality or regex
    pub fn matches(&self, line: &str) -> bool {
        line.contains(&self.text)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

/// Half-open line range `[start, end)` targeted for replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Locate the region between the first start-marker line and the first
/// end-marker line of the file, which must come after it.
///
/// `path` is only used for error context.
pub fn locate_region(
    lines: &[String],
    start_marker: &Marker,
    end_marker: &Marker,
    path: &Path,
) -> SpliceResult<Region> {
    let start = lines
        .iter()
        .position(|line| start_marker.matches(line))
        .ok_or_else(|| SpliceError::marker_not_found(MarkerKind::Start, start_marker.as_str(), path))?;

    let end = lines
        .iter()
        .position(|line| end_marker.matches(line))
        .ok_or_else(|| SpliceError::marker_not_found(MarkerKind::End, end_marker.as_str(), path))?;

    // an end marker at or above the start line makes the ordering ambiguous
    if end <= start {
        return Err(SpliceError::invalid_region(start, end));
    }

    let region = Region { start, end };
    debug!(
        "Located region [{}, {}) in {} ({} lines)",
        region.start,
        region.end,
        path.display(),
        region.len()
    );
    Ok(region)
}
