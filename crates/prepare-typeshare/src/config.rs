//! Configuration types for a preparation run.

use std::path::{Path, PathBuf};

use crate::manifest::SWAPPER_ERROR_SOURCE;

/// Default generator executable, looked up on `PATH`.
pub const DEFAULT_TYPESHARE: &str = "typeshare";

/// Everything [`crate::prepare`] needs to know.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// Root containing the generated `primitives/` directory.
    pub source_dir: PathBuf,
    /// Directory that is recreated and populated.
    pub output_dir: PathBuf,
    /// Regenerate `swap/Error.ts` with typeshare. `None` skips the step.
    pub swapper_error: Option<SwapperErrorConfig>,
}

impl PrepareConfig {
    /// Copy-only configuration; no external generator is run.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            swapper_error: None,
        }
    }

    /// Also regenerate the swapper error type after copying.
    pub fn with_swapper_error(mut self, swapper_error: SwapperErrorConfig) -> Self {
        self.swapper_error = Some(swapper_error);
        self
    }
}

/// Settings for the typeshare invocation that produces `swap/Error.ts`.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SwapperErrorConfig {
    /// The Rust source holding the swapper error definitions.
    pub input: PathBuf,
    /// Generator executable name or path.
    pub program: String,
}

impl SwapperErrorConfig {
    /// Explicit input file and generator program.
    pub fn new(input: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            program: program.into(),
        }
    }
}

/// The swapper `error.rs` in the `core` checkout next to this repository.
///
/// Resolved at compile time from this crate's manifest directory
/// (`<repo>/crates/<crate>`), so it points at
/// `<repo>/../core/crates/swapper/src/error.rs` on the machine that built the
/// binary. Installed binaries should pass the input explicitly.
///
/// Returns `None` when the manifest directory has no such ancestor.
pub fn default_swapper_error_path() -> Option<PathBuf> {
    manifest_siblings_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
        .map(|dir| dir.join(SWAPPER_ERROR_SOURCE))
}

/// The directory holding the repository that contains `manifest_dir`.
fn manifest_siblings_dir(manifest_dir: &Path) -> Option<&Path> {
    manifest_dir.ancestors().nth(3)
}
