use cobertura_gen::{storage, Config};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate a large Cobertura XML file for benchmarking
#[derive(Parser)]
#[command(name = "gen-cobertura")]
#[command(version, about)]
struct Cli {
    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target file size in MB (default: 10)
    #[arg(long, value_name = "SIZE")]
    target_mb: Option<f64>,

    /// TOML file with a [generator] table; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging with source locations
    #[arg(long)]
    dev: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.dev);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.output, cli.target_mb);
    config.validate()?;

    let output = config
        .output()
        .context("no output path configured")?
        .to_path_buf();
    let target_mb = config.generator.target_mb;

    tracing::info!("Generating ~{} MB Cobertura XML -> {}", target_mb, output.display());

    let mut rng = rand::thread_rng();
    let summary = storage::write_report_file(&output, config.target_bytes(), &mut rng)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        packages = summary.packages,
        classes = summary.classes,
        methods = summary.methods,
        "Done: {:.1} MB written to {}",
        summary.megabytes(),
        output.display()
    );

    Ok(())
}

fn setup_logging(dev_mode: bool) {
    // Diagnostics go to stderr; RUST_LOG overrides the default level.
    let default_level = if dev_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if dev_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
