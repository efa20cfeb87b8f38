use std::path::Path;
use tracing::debug;

use super::lines::{payload_lines, split_lines, LineEnding};
use super::region::{locate_region, Marker, Region};
use super::report::SpliceReport;
use crate::error::SpliceResult;

/// The outcome of splicing a payload into some text, before anything is written
#[derive(Debug, Clone)]
pub struct SplicePlan {
    pub original: String,
    pub updated: String,
    pub line_ending: LineEnding,
    pub report: SpliceReport,
}

impl SplicePlan {
    pub fn is_noop(&self) -> bool {
        self.original == self.updated
    }
}

/// Replace `region` of `lines` with `payload`, keeping everything outside it
pub fn splice_lines(lines: &[String], region: Region, payload: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len() - region.len() + payload.len());
    result.extend_from_slice(&lines[..region.start]);
    result.extend_from_slice(payload);
    result.extend_from_slice(&lines[region.end..]);
    result
}

/// Compute the spliced text for `content`.
///
/// All marker and region checks run here, so a failure never reaches the disk.
pub fn plan_splice(
    content: &str,
    start_marker: &Marker,
    end_marker: &Marker,
    payload: &str,
    path: &Path,
) -> SpliceResult<SplicePlan> {
    let lines = split_lines(content);
    let region = locate_region(&lines, start_marker, end_marker, path)?;

    let line_ending = LineEnding::detect(content);
    let payload = payload_lines(payload, line_ending);
    debug!(
        "Payload spans {} lines ({} line endings)",
        payload.len(),
        line_ending
    );

    let new_lines = splice_lines(&lines, region, &payload);
    let report = SpliceReport::new(region, payload.len(), lines.len(), new_lines.len());

    Ok(SplicePlan {
        original: content.to_string(),
        updated: new_lines.concat(),
        line_ending,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MarkerKind, SpliceError};

    fn marker(text: &str) -> Marker {
        Marker::new(text).unwrap()
    }

    fn numbered_file(total: usize, start: usize, end: usize) -> String {
        (1..=total)
            .map(|n| {
                if n == start {
                    format!("line {} {{/* Create Staff Modal */}}\n", n)
                } else if n == end {
                    format!("line {} // JWT Debug Panel Component\n", n)
                } else {
                    format!("line {}\n", n)
                }
            })
            .collect()
    }

    #[test]
    fn test_two_hundred_line_scenario() {
        let content = numbered_file(200, 50, 90);
        let payload = "<StaffModal />\n<CategoryModal />\n<ZoneModal />\n";
        let plan = plan_splice(
            &content,
            &marker("/* Create Staff Modal */"),
            &marker("// JWT Debug Panel Component"),
            payload,
            Path::new("dashboard.jsx"),
        )
        .unwrap();

        let old_lines = split_lines(&content);
        let new_lines = split_lines(&plan.updated);
        let p = 3;

        assert_eq!(new_lines.len(), 200 - (90 - 50) + p);
        assert_eq!(plan.report.removed_lines, 40);
        assert_eq!(plan.report.payload_lines, p);
        assert_eq!(plan.report.original_lines, 200);
        assert_eq!(plan.report.new_lines, new_lines.len());

        assert_eq!(&new_lines[..49], &old_lines[..49]);
        assert_eq!(new_lines[49..49 + p].concat(), payload);
        assert_eq!(&new_lines[49 + p..], &old_lines[89..]);
        assert_eq!(new_lines[49 + p], "line 90 // JWT Debug Panel Component\n");
    }

    #[test]
    fn test_replanning_result_fails() {
        let content = numbered_file(10, 3, 6);
        let start = marker("/* Create Staff Modal */");
        let end = marker("// JWT Debug Panel Component");
        let plan = plan_splice(&content, &start, &end, "<Modals />\n", Path::new("f")).unwrap();

        let err = plan_splice(&plan.updated, &start, &end, "<Modals />\n", Path::new("f")).unwrap_err();
        assert!(matches!(
            err,
            SpliceError::MarkerNotFound {
                which: MarkerKind::Start,
                ..
            }
        ));
    }

    #[test]
    fn test_crlf_is_preserved() {
        let content = "a\r\nBEGIN\r\nold\r\nEND\r\nz\r\n";
        let plan = plan_splice(content, &marker("BEGIN"), &marker("END"), "new 1\nnew 2", Path::new("f")).unwrap();
        assert_eq!(plan.updated, "a\r\nnew 1\r\nnew 2\r\nEND\r\nz\r\n");
        assert_eq!(plan.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_empty_payload_deletes_region() {
        let content = "a\nBEGIN\nold\nEND\n";
        let plan = plan_splice(content, &marker("BEGIN"), &marker("END"), "", Path::new("f")).unwrap();
        assert_eq!(plan.updated, "a\nEND\n");
        assert_eq!(plan.report.payload_lines, 0);
        assert_eq!(plan.report.new_lines, 2);
    }

    #[test]
    fn test_end_marker_on_unterminated_last_line() {
        let content = "BEGIN\nold\nEND";
        let plan = plan_splice(content, &marker("BEGIN"), &marker("END"), "new", Path::new("f")).unwrap();
        assert_eq!(plan.updated, "new\nEND");
        assert!(!plan.is_noop());
    }
}
