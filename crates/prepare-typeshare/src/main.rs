//! `prepare-typeshare`: copies generated TypeScript primitives into a package
//! and regenerates the swapper error type.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use typeshare_prep::config::{DEFAULT_TYPESHARE, default_swapper_error_path};
use typeshare_prep::{PrepareConfig, SwapperErrorConfig, prepare};

#[derive(Parser, Debug)]
#[command(name = "prepare-typeshare", version, about)]
struct Cli {
    /// typeshare output root containing a primitives/ folder
    source_dir: PathBuf,

    /// Directory to recreate with the prepared files
    output_dir: PathBuf,

    /// Only copy and patch; do not regenerate swap/Error.ts
    #[arg(long, conflicts_with = "swapper_error")]
    no_swapper_error: bool,

    /// Swapper error definitions (defaults to ../core/crates/swapper/src/error.rs
    /// next to this repository)
    #[arg(long, value_name = "PATH")]
    swapper_error: Option<PathBuf>,

    /// typeshare executable
    #[arg(long, env = "TYPESHARE_BIN", default_value = DEFAULT_TYPESHARE)]
    typeshare: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = PrepareConfig::new(&cli.source_dir, &cli.output_dir);
    if !cli.no_swapper_error {
        let input = cli
            .swapper_error
            .or_else(default_swapper_error_path)
            .ok_or_else(|| {
                anyhow!("cannot resolve the default swapper error.rs; pass --swapper-error")
            })?;
        config = config.with_swapper_error(SwapperErrorConfig::new(input, cli.typeshare));
    }

    let report = prepare(&config).with_context(|| {
        format!(
            "preparing {} from {}",
            cli.output_dir.display(),
            cli.source_dir.display()
        )
    })?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
