//! Filesystem primitives shared across the codebase.
//!
//! Every mutation of a managed file goes through [`write_atomic`]; the
//! temp-then-rename sequence lives here and nowhere else.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Durably replace the contents of `path` with `bytes`.
///
/// The payload is written in full to a sibling temporary file and then
/// renamed over the target, so the target always holds either its old or its
/// new content. Parent directories are created if absent. Errors propagate to
/// the caller without retries.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::fs(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    let tmp = tmp_sibling(path);
    fs::write(&tmp, bytes)
        .map_err(|e| Error::fs(format!("Failed to write {}", tmp.display()), e))?;
    fs::rename(&tmp, path)
        .map_err(|e| Error::fs(format!("Failed to replace {}", path.display()), e))
}

/// Read a settings blob in full.
pub fn read_blob(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::fs(format!("Failed to read {}", path.display()), e))
}

// The temp file must sit next to the target so the rename never crosses a
// filesystem boundary.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
