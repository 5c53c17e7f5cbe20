//! Running the external typeshare generator for the swapper error type.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::config::SwapperErrorConfig;
use crate::error::{PrepareError, Result};
use crate::manifest::SWAPPER_ERROR_OUTPUT;

/// Target language passed to typeshare.
pub const TARGET_LANG: &str = "typescript";

/// Build the typeshare command line for `input` → `output_file`.
pub fn typeshare_command(program: &str, input: &Path, output_file: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg(input)
        .arg(format!("--lang={TARGET_LANG}"))
        .arg(format!("--output-file={}", output_file.display()));
    cmd
}

/// Generate `<output_root>/swap/Error.ts` from the swapper error definitions.
///
/// Returns the path of the generated file.
pub fn generate_swapper_error(config: &SwapperErrorConfig, output_root: &Path) -> Result<PathBuf> {
    if !config.input.exists() {
        return Err(PrepareError::MissingFile {
            path: config.input.clone(),
        });
    }

    let output_file = output_root.join(SWAPPER_ERROR_OUTPUT);
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent).map_err(|e| PrepareError::io("create", parent, e))?;
    }

    info!(
        program = %config.program,
        input = %config.input.display(),
        output = %output_file.display(),
        "running typeshare"
    );
    let status = typeshare_command(&config.program, &config.input, &output_file)
        .status()
        .map_err(|source| PrepareError::ToolSpawn {
            program: config.program.clone(),
            source,
        })?;
    if !status.success() {
        return Err(PrepareError::ExternalToolFailure {
            program: config.program.clone(),
            status,
        });
    }

    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_shape() {
        let cmd = typeshare_command(
            "typeshare",
            Path::new("core/crates/swapper/src/error.rs"),
            Path::new("out/swap/Error.ts"),
        );
        assert_eq!(cmd.get_program(), "typeshare");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "core/crates/swapper/src/error.rs",
                "--lang=typescript",
                "--output-file=out/swap/Error.ts",
            ]
        );
    }

    #[test]
    fn missing_input_is_reported_before_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let config = SwapperErrorConfig::new(dir.path().join("error.rs"), "definitely-not-a-program");
        let err = generate_swapper_error(&config, dir.path()).unwrap_err();
        assert!(matches!(err, PrepareError::MissingFile { .. }));
        assert!(!dir.path().join("swap").exists());
    }

    #[test]
    fn unknown_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("error.rs");
        fs::write(&input, "pub enum SwapperError {}\n").unwrap();

        let config = SwapperErrorConfig::new(&input, "definitely-not-a-program-7f3a");
        let err = generate_swapper_error(&config, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, PrepareError::ToolSpawn { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_tool_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("error.rs");
        fs::write(&input, "pub enum SwapperError {}\n").unwrap();

        let config = SwapperErrorConfig::new(&input, "false");
        let err = generate_swapper_error(&config, &dir.path().join("out")).unwrap_err();
        match err {
            PrepareError::ExternalToolFailure { program, status } => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(dir.path().join("out/swap").is_dir());
    }
}
