use tracing::{debug, info, instrument};

use crate::config::SpliceJob;
use crate::diff::splice::{plan_splice, SplicePlan};
use crate::error::SpliceResult;
use crate::file::operations::{read_text, write_atomic};

/// Whether a splice is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    #[default]
    Write,
    DryRun,
}

/// Runs a single [`SpliceJob`] against the file system
pub struct RegionSplicer {
    job: SpliceJob,
}

impl RegionSplicer {
    pub fn new(job: SpliceJob) -> Self {
        Self { job }
    }

    /// Read the target and compute the splice without touching the disk
    pub fn plan(&self) -> SpliceResult<SplicePlan> {
        let payload = self.job.payload.resolve()?;
        let content = read_text(&self.job.path)?;
        plan_splice(
            &content,
            &self.job.start_marker,
            &self.job.end_marker,
            &payload,
            &self.job.path,
        )
    }

    /// Plan the splice and, unless `mode` is a dry run, write it back
    #[instrument(skip(self), fields(path = %self.job.path.display()))]
    pub fn run(&self, mode: ApplyMode) -> SpliceResult<SplicePlan> {
        let plan = match self.plan() {
            Ok(plan) => plan,
            Err(e) => {
                debug!(kind = e.kind_name(), "Splice aborted before writing: {}", e);
                return Err(e);
            }
        };

        if plan.is_noop() {
            info!("Payload is identical to the region, nothing changes");
        }

        match mode {
            ApplyMode::DryRun => {
                info!(
                    "Dry run: would replace {} lines with {}",
                    plan.report.removed_lines, plan.report.payload_lines
                );
            }
            ApplyMode::Write => {
                write_atomic(&self.job.path, &plan.updated)?;
                info!(
                    "Replaced {} lines with {} in {}",
                    plan.report.removed_lines,
                    plan.report.payload_lines,
                    self.job.path.display()
                );
            }
        }

        Ok(plan)
    }
}
