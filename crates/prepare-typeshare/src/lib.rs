//! Build-time preparation of typeshare-generated TypeScript primitives.
//!
//! Copies a fixed whitelist of generated files out of a typeshare output
//! tree, patches in the imports the generator does not emit, writes the
//! package index, and optionally regenerates the swapper error type with the
//! `typeshare` CLI. This is an internal build tool, not a runtime dependency.

pub mod config;
pub mod copy;
pub mod error;
pub mod manifest;
pub mod patch;
pub mod typeshare;

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

pub use config::{PrepareConfig, SwapperErrorConfig};
pub use copy::{CopiedFile, CopyReport, copy_required_files};
pub use error::{PrepareError, Result};
pub use patch::{PatchOutcome, apply_import_patch, insert_import};
pub use typeshare::generate_swapper_error;

/// Summary of a successful run, printed as JSON by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct PrepareReport {
    /// Always `true`; failures are reported as errors instead.
    pub ok: bool,
    /// The recreated output directory.
    pub output_dir: PathBuf,
    /// Copied files and their patch outcomes.
    #[serde(flatten)]
    pub copy: CopyReport,
    /// The generated swapper error file, when that step ran.
    pub swapper_error: Option<PathBuf>,
}

/// Run the full pipeline: copy and patch, write the index, then regenerate
/// the swapper error type if configured.
pub fn prepare(config: &PrepareConfig) -> Result<PrepareReport> {
    let copy = copy_required_files(&config.source_dir, &config.output_dir)?;

    let swapper_error = match &config.swapper_error {
        Some(swapper) => Some(generate_swapper_error(swapper, &config.output_dir)?),
        None => {
            info!("skipping swapper error generation");
            None
        }
    };

    Ok(PrepareReport {
        ok: true,
        output_dir: config.output_dir.clone(),
        copy,
        swapper_error,
    })
}
