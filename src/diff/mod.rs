pub mod lines;
pub mod preview;
pub mod region;
pub mod report;
pub mod splice;

pub use lines::{payload_lines, split_lines, LineEnding};
pub use preview::unified_preview;
pub use region::{locate_region, Marker, Region};
pub use report::SpliceReport;
pub use splice::{plan_splice, splice_lines, SplicePlan};
