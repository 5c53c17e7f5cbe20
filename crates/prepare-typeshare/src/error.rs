//! Typed error types for the preparation pipeline.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Failure conditions of a preparation run.
///
/// None of these are recovered from: the pipeline stops at the first error
/// and leaves whatever it already wrote in the output directory.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    // -- Inputs --
    /// The generated primitives directory does not exist.
    #[error("generated primitives directory not found at {}", path.display())]
    MissingDirectory {
        /// The directory that was expected.
        path: PathBuf,
    },

    /// A required input file does not exist.
    #[error("required file missing: {}", path.display())]
    MissingFile {
        /// The file that was expected.
        path: PathBuf,
    },

    // -- External generator --
    /// The code generator ran but exited unsuccessfully.
    #[error("{program} failed with {status}")]
    ExternalToolFailure {
        /// The program that was invoked.
        program: String,
        /// Its exit status.
        status: ExitStatus,
    },

    /// The code generator could not be started at all.
    #[error("failed to run {program}")]
    ToolSpawn {
        /// The program that was invoked.
        program: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    // -- I/O --
    /// Any other filesystem operation failed.
    #[error("{op} {}", path.display())]
    Io {
        /// Short description of the failed operation, e.g. `"copy to"`.
        op: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl PrepareError {
    /// Wrap an I/O error with the operation and path it came from.
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        PrepareError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = PrepareError> = std::result::Result<T, E>;
