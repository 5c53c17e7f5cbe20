//! Copying the generated primitives into a fresh output directory.

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PrepareError, Result};
use crate::manifest::{
    INDEX_FILE, INDEX_TEMPLATE, PRIMITIVES_DIR, REQUIRED_FILES, import_patch_for,
};
use crate::patch::{PatchOutcome, apply_import_patch};

/// One copied file and what the patcher did to it.
#[derive(Debug, Clone, Serialize)]
pub struct CopiedFile {
    /// Path relative to both the primitives directory and the output root.
    pub relative_path: &'static str,
    /// Absolute or caller-relative destination path.
    pub destination: PathBuf,
    /// Result of the import patch step.
    pub patch: PatchOutcome,
}

/// Result of [`copy_required_files`].
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    /// Files copied, in [`REQUIRED_FILES`] order.
    pub files: Vec<CopiedFile>,
    /// Path of the written index file.
    pub index: PathBuf,
}

/// Recreate `target_root` from the generated primitives under `source_root`.
///
/// The source directory is checked before the target is touched, so a
/// missing `primitives/` leaves an existing target in place. A missing
/// required file aborts after the target has already been recreated.
pub fn copy_required_files(source_root: &Path, target_root: &Path) -> Result<CopyReport> {
    let primitives_root = source_root.join(PRIMITIVES_DIR);
    if !primitives_root.exists() {
        return Err(PrepareError::MissingDirectory {
            path: primitives_root,
        });
    }

    recreate_dir(target_root)?;
    info!(target = %target_root.display(), "recreated output directory");

    let mut files = Vec::with_capacity(REQUIRED_FILES.len());
    for relative_path in REQUIRED_FILES {
        let source = primitives_root.join(relative_path);
        if !source.exists() {
            return Err(PrepareError::MissingFile { path: source });
        }
        let destination = target_root.join(relative_path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| PrepareError::io("create", parent, e))?;
        }
        copy_with_times(&source, &destination)?;

        let patch = apply_import_patch(&destination, import_patch_for(relative_path))?;
        debug!(file = relative_path, ?patch, "copied");
        files.push(CopiedFile {
            relative_path,
            destination,
            patch,
        });
    }

    let index = target_root.join(INDEX_FILE);
    fs::write(&index, INDEX_TEMPLATE).map_err(|e| PrepareError::io("write", &index, e))?;
    info!(count = files.len(), "copied generated primitives");

    Ok(CopyReport { files, index })
}

fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| PrepareError::io("remove", dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| PrepareError::io("create", dir, e))
}

/// Copy contents and permissions, then carry over access/modification times.
fn copy_with_times(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).map_err(|e| PrepareError::io("copy to", destination, e))?;

    let meta = fs::metadata(source).map_err(|e| PrepareError::io("stat", source, e))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    open_for_times(destination)
        .and_then(|f| f.set_times(times))
        .map_err(|e| PrepareError::io("set times on", destination, e))
}

/// Setting explicit times needs ownership only, so a read-only copy works.
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    File::open(path)
}

/// Windows needs write-attribute access to change file times.
#[cfg(not(unix))]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    File::options().write(true).open(path)
}
