use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::JobSpec;
use crate::error::{SpliceError, SpliceResult};
use crate::file::operations::read_text;

/// Loads splice jobs from TOML files
pub struct JobLoader {
    job_path: PathBuf,
}

impl JobLoader {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            job_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.job_path
    }

    /// Load the job, resolving relative paths against the job file's directory
    pub fn load(&self) -> SpliceResult<JobSpec> {
        let content = read_text(&self.job_path)?;
        let spec: JobSpec = toml::from_str(&content).map_err(|e| {
            SpliceError::invalid_job(format!(
                "failed to parse {}: {}",
                self.job_path.display(),
                e
            ))
        })?;

        let base = self
            .job_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!(
            "Loaded job from {} (base directory: {})",
            self.job_path.display(),
            base.display()
        );

        Ok(spec.relative_to(&base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_job_file() {
        let dir = tempdir().unwrap();
        let job_path = dir.path().join("job.toml");
        fs::write(
            &job_path,
            r#"
path = "src/pages/BusinessAdminDashboard.jsx"
start_marker = "/* Create Staff Modal */"
end_marker = "// JWT Debug Panel Component"
payload = """
      <CreateStaffModal />
"""
"#,
        )
        .unwrap();

        let spec = JobLoader::with_path(&job_path).load().unwrap();
        assert_eq!(
            spec.path,
            Some(dir.path().join("src/pages/BusinessAdminDashboard.jsx"))
        );
        assert_eq!(spec.payload.as_deref(), Some("      <CreateStaffModal />\n"));
        assert!(spec.into_job().is_ok());
    }

    #[test]
    fn test_bundled_demo_job() {
        let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/replace_modals.toml");
        let spec = JobLoader::with_path(&demo).load().unwrap();
        assert_eq!(spec.path, None);

        let overrides = JobSpec {
            path: Some(PathBuf::from("BusinessAdminDashboard.jsx")),
            ..Default::default()
        };
        let job = spec.merge(overrides).into_job().unwrap();
        let payload = job.payload.resolve().unwrap();
        assert!(payload.contains("<CreateStaffModal"));
        assert!(payload.contains("<EditZoneModal"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempdir().unwrap();
        let job_path = dir.path().join("job.toml");
        fs::write(&job_path, "path = \"a.jsx\"\nbackup = true\n").unwrap();

        let err = JobLoader::with_path(&job_path).load().unwrap_err();
        assert!(matches!(err, SpliceError::InvalidJob { .. }));
    }

    #[test]
    fn test_missing_job_file() {
        let dir = tempdir().unwrap();
        let err = JobLoader::with_path(dir.path().join("none.toml")).load().unwrap_err();
        assert!(matches!(err, SpliceError::FileNotFound { .. }));
    }
}
