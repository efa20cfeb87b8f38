use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{SpliceError, SpliceResult};
use crate::error_handling::fs_operation;

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> SpliceResult<String> {
    let bytes = fs_operation(|| fs::read(path), path, "Read")?;
    let content = String::from_utf8(bytes).map_err(|_| SpliceError::encoding(path))?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Replace the contents of `path` atomically.
///
/// The new contents go to a temporary file in the same directory, which is
/// then renamed over the target. An interrupted write leaves the old file.
/// Symlinks are followed, so the file they point at is the one replaced.
pub fn write_atomic(path: &Path, content: &str) -> SpliceResult<()> {
    let target = if path.exists() {
        fs_operation(|| fs::canonicalize(path), path, "Resolve path")?
    } else {
        path.to_path_buf()
    };
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = fs_operation(|| NamedTempFile::new_in(dir), dir, "Create temp file")?;
    let temp_path = temp_file.path().to_path_buf();
    fs_operation(|| temp_file.write_all(content.as_bytes()), &temp_path, "Write")?;
    fs_operation(|| temp_file.as_file().sync_all(), &temp_path, "Sync")?;

    // keep the target's mode; the temp file is created 0600
    if let Ok(metadata) = fs::metadata(path) {
        fs_operation(
            || temp_file.as_file().set_permissions(metadata.permissions()),
            path,
            "Copy permissions",
        )?;
    }

    temp_file
        .persist(path)
        .map_err(|e| SpliceError::io_error(e.error, path))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
