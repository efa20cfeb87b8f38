use serde::Serialize;
use std::fmt;

use super::region::Region;

/// Size summary of a single splice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpliceReport {
    pub region_start: usize,
    pub region_end: usize,
    pub removed_lines: usize,
    pub payload_lines: usize,
    pub original_lines: usize,
    pub new_lines: usize,
}

impl SpliceReport {
    pub fn new(region: Region, payload_lines: usize, original_lines: usize, new_lines: usize) -> Self {
        Self {
            region_start: region.start,
            region_end: region.end,
            removed_lines: region.len(),
            payload_lines,
            original_lines,
            new_lines,
        }
    }

    /// Lines saved; negative when the payload is longer than the region
    pub fn reduction(&self) -> i64 {
        self.original_lines as i64 - self.new_lines as i64
    }

    pub fn reduction_percent(&self) -> f64 {
        if self.original_lines == 0 {
            return 0.0;
        }
        self.reduction() as f64 / self.original_lines as f64 * 100.0
    }
}

impl fmt::Display for SpliceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found region: lines {} to {}",
            self.region_start + 1,
            self.region_end
        )?;
        writeln!(
            f,
            "Replaced {} lines with {} lines",
            self.removed_lines, self.payload_lines
        )?;
        writeln!(f, "   Old file: {} lines", self.original_lines)?;
        writeln!(f, "   New file: {} lines", self.new_lines)?;
        write!(
            f,
            "   Reduction: {} lines ({:.1}%)",
            self.reduction(),
            self.reduction_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = SpliceReport::new(Region { start: 49, end: 89 }, 10, 200, 170);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Found region: lines 50 to 89");
        assert_eq!(lines[1], "Replaced 40 lines with 10 lines");
        assert_eq!(lines[2], "   Old file: 200 lines");
        assert_eq!(lines[3], "   New file: 170 lines");
        assert_eq!(lines[4], "   Reduction: 30 lines (15.0%)");
    }

    #[test]
    fn test_growth_is_negative_reduction() {
        let report = SpliceReport::new(Region { start: 0, end: 1 }, 5, 4, 8);
        assert_eq!(report.reduction(), -4);
        assert!((report.reduction_percent() + 100.0).abs() < f64::EPSILON);
    }
}
