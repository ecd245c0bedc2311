//! CLI module for the `lorem` command.
//!
//! Wires a [`Config`] to a [`Generator`], a text sink and a statistics sink.

mod config;

pub use config::{Config, ConfigError, GenerationConfig, OutputConfig, StatsFormat};

use crate::errors::GenerateError;
use crate::generator::Generator;
use crate::random::StdRandom;
use crate::stats::GenerationStats;
use std::io::{self, Write};

/// Errors from a complete command run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("failed to write statistics: {0}")]
    Report(#[from] io::Error),
    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Generate text into `out` and, if enabled, statistics into `report`
pub fn run<W: Write, E: Write>(
    config: &Config,
    out: W,
    mut report: E,
) -> Result<GenerationStats, RunError> {
    config.validate()?;

    let generation = &config.generation;
    tracing::info!(
        unit = %generation.unit,
        target = generation.target,
        start_with_lorem = generation.start_with_lorem,
        seeded = generation.seed.is_some(),
        "Generating lorem ipsum"
    );

    let mut generator = Generator::with_source(
        out,
        generation.start_with_lorem,
        generation.unit,
        generation.target,
        StdRandom::from_seed_option(generation.seed),
    );
    generator.generate()?;

    let stats = generator.stats();
    generator
        .into_inner()
        .flush()
        .map_err(GenerateError::from)?;

    if config.output.stats {
        write_report(&mut report, &stats, config.output.stats_format)?;
    }

    Ok(stats)
}

/// Print statistics in the requested format
pub fn write_report<E: Write>(
    report: &mut E,
    stats: &GenerationStats,
    format: StatsFormat,
) -> Result<(), RunError> {
    match format {
        StatsFormat::Text => write!(report, "\n{stats}")?,
        StatsFormat::Json => writeln!(report, "{}", stats.to_json()?)?,
    }
    report.flush()?;
    Ok(())
}
