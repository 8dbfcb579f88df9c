//! Whole-file replacement writes.
//!
//! Content is written to `.{name}.tmp` next to the target, synced, then
//! renamed over the target. A reader either sees the previous file or the
//! complete new one. After a crash the temp file may be left behind; the
//! next successful write overwrites it.

use crate::error::{QuillError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `path` with `content`.
///
/// The parent directory must already exist.
pub fn write_atomic<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = temp_path_for(path)?;
    write_synced(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        QuillError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            QuillError::IoError(format!("invalid output path '{}'", target.display()))
        })?;
    let parent = target.parent().unwrap_or(Path::new(""));
    Ok(parent.join(format!(".{}.tmp", name)))
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        QuillError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            QuillError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
