//! Import patching for generated TypeScript files.
//!
//! typeshare emits each file with a leading doc comment followed by a blank
//! line. Missing imports go right after that header; files without one get
//! the import prepended.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PrepareError, Result};

/// End of the generated file header: a closing block comment and a blank line.
pub const HEADER_MARKER: &str = "*/\n\n";

/// What [`apply_import_patch`] did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    /// No patch is registered for the file.
    NotRegistered,
    /// The import was already present; the file was not rewritten.
    AlreadyPresent,
    /// The import was inserted after the generated header.
    InsertedAfterMarker,
    /// No header was found; the import was prepended.
    Prepended,
}

/// Insert `patch` into `content`, returning the new text and where it went.
///
/// Returns `None` when the trimmed patch already occurs in `content`.
pub fn insert_import(content: &str, patch: &str) -> Option<(String, PatchOutcome)> {
    if content.contains(patch.trim()) {
        return None;
    }

    let mut out = String::with_capacity(content.len() + patch.len());
    let outcome = match content.find(HEADER_MARKER) {
        Some(pos) => {
            let split = pos + HEADER_MARKER.len();
            out.push_str(&content[..split]);
            out.push_str(patch);
            out.push_str(&content[split..]);
            PatchOutcome::InsertedAfterMarker
        }
        None => {
            out.push_str(patch);
            out.push_str(content);
            PatchOutcome::Prepended
        }
    };
    Some((out, outcome))
}

/// Apply `patch` to the file at `path` in place.
pub fn apply_import_patch(path: &Path, patch: Option<&str>) -> Result<PatchOutcome> {
    let Some(patch) = patch.filter(|p| !p.is_empty()) else {
        return Ok(PatchOutcome::NotRegistered);
    };

    let content = fs::read_to_string(path).map_err(|e| PrepareError::io("read", path, e))?;
    match insert_import(&content, patch) {
        None => Ok(PatchOutcome::AlreadyPresent),
        Some((patched, outcome)) => {
            fs::write(path, patched).map_err(|e| PrepareError::io("write", path, e))?;
            Ok(outcome)
        }
    }
}
