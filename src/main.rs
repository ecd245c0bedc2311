//! lorem - Lorem ipsum generator
//!
//! Usage:
//!   lorem [OPTIONS]
//!
//! Examples:
//!   lorem                       # five paragraphs
//!   lorem -t w -n 42 --ipsum    # 42 words starting with "Lorem ipsum..."
//!   lorem -t b -n 1024 --stats  # at least 1 KiB, statistics on stderr
//!   lorem --config lorem.yaml

use clap::Parser;
use lorem::cli::{Config, ConfigError, StatsFormat};
use lorem::StopUnit;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lorem")]
#[command(author, version, about = "Lorem ipsum generator", long_about = None)]
struct Cli {
    /// Configuration file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to generate: p (paragraphs), w (words), b (bytes) [default: p]
    #[arg(short = 't', long = "type", value_name = "UNIT")]
    unit: Option<StopUnit>,

    /// How many <UNIT> to generate [default: 5]
    #[arg(short, long)]
    number: Option<usize>,

    /// Start with "Lorem ipsum dolor sit amet..."
    #[arg(short, long)]
    ipsum: bool,

    /// Print statistics to stderr
    #[arg(short, long)]
    stats: bool,

    /// Statistics format
    #[arg(long, value_enum)]
    stats_format: Option<StatsFormat>,

    /// Seed for reproducible output
    #[arg(long, env = "LOREM_SEED")]
    seed: Option<u64>,
}

fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = if let Some(path) = &cli.config {
        Config::from_file(path)?
    } else {
        Config::default()
    };

    // Flags given on the command line override the file
    if let Some(unit) = cli.unit {
        config.generation.unit = unit;
    }
    if let Some(number) = cli.number {
        config.generation.target = number;
    }
    if cli.ipsum {
        config.generation.start_with_lorem = true;
    }
    if let Some(seed) = cli.seed {
        config.generation.seed = Some(seed);
    }
    if cli.stats {
        config.output.stats = true;
    }
    if let Some(format) = cli.stats_format {
        config.output.stats_format = format;
    }

    config.validate()?;
    Ok(config)
}

fn execute(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli)?;
    lorem::cli::run(&config, io::stdout().lock(), io::stderr().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only generated text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lorem=warn")),
        )
        .with_writer(io::stderr)
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "Generation failed");
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
