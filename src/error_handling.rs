use crate::error::{SpliceError, SpliceResult};
use std::path::Path;
use tracing::error;

/// Safely executes filesystem operations, mapping IO failures onto `SpliceError`
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, operation_name: &str) -> SpliceResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!(
            "{} failed on {}: {} (at {}:{})",
            operation_name,
            path_ref.display(),
            e,
            file!(),
            line!()
        );

        match e.kind() {
            std::io::ErrorKind::NotFound => SpliceError::file_not_found(path_ref),
            std::io::ErrorKind::InvalidData => SpliceError::encoding(path_ref),
            _ => SpliceError::io_error(e, path_ref),
        }
    })
}
