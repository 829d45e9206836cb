//! Day Plot - command-line entry point
//!
//! Reads a CSV of detector frames and writes the day plot description as JSON.
//!
//! Usage:
//! ```bash
//! dayplot --input frames.csv [--output plot.json] [--config dayplot_config.json] [--log debug]
//! ```

use anyhow::{bail, Context};
use dayplot::config::{PlotConfig, DEFAULT_CONFIG_PATH};
use dayplot::logging::{init_logging, LoggingConfig};
use dayplot::pipeline;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--input", Some(v)) => parsed.input = Some(PathBuf::from(v)),
            ("--output", Some(v)) => parsed.output = Some(PathBuf::from(v)),
            ("--config", Some(v)) => parsed.config = Some(PathBuf::from(v)),
            ("--log", Some(v)) => parsed.log_filter = Some(v.clone()),
            (flag, None) if flag.starts_with("--") => bail!("Missing value for {}", flag),
            (other, _) => bail!("Unknown argument: {}", other),
        }
        i += 2;
    }
    Ok(parsed)
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args)?;

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..Default::default()
    });
    log::info!("Day Plot v{}", env!("CARGO_PKG_VERSION"));

    let input = args
        .input
        .context("--input <csv> is required")?;
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = PlotConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let plot = pipeline::run(&input, &config)
        .with_context(|| format!("Failed to build day plot from {}", input.display()))?;
    let json = plot.to_json()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Saved {} quad(s) to {}", plot.quads.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}
