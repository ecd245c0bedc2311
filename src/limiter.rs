// Limiter Module
// Tracks generation counters and decides when to stop.

use crate::stats::GenerationStats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit the stop condition is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopUnit {
    #[serde(alias = "w")]
    Words,
    #[serde(alias = "b")]
    Bytes,
    #[default]
    #[serde(alias = "p")]
    Paragraphs,
}

impl StopUnit {
    /// Short token used on the command line
    pub fn token(&self) -> &'static str {
        match self {
            StopUnit::Words => "w",
            StopUnit::Bytes => "b",
            StopUnit::Paragraphs => "p",
        }
    }
}

impl fmt::Display for StopUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StopUnit::Words => "words",
            StopUnit::Bytes => "bytes",
            StopUnit::Paragraphs => "paragraphs",
        };
        f.write_str(name)
    }
}

/// Error returned for an unrecognised stop unit token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit {0:?}, expected one of: p (paragraphs), w (words), b (bytes)")]
pub struct ParseUnitError(pub String);

impl FromStr for StopUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "w" | "word" | "words" => Ok(StopUnit::Words),
            "b" | "byte" | "bytes" => Ok(StopUnit::Bytes),
            "p" | "paragraph" | "paragraphs" => Ok(StopUnit::Paragraphs),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Counts words, bytes and paragraphs, and checks one of them against a target.
///
/// All three counters are updated regardless of the active unit so that
/// complete statistics are available after any run.
#[derive(Debug, Clone)]
pub struct Limiter {
    unit: StopUnit,
    target: usize,
    word_count: usize,
    byte_count: usize,
    paragraph_count: usize,
}

impl Limiter {
    pub fn new(unit: StopUnit, target: usize) -> Self {
        Self {
            unit,
            target,
            word_count: 0,
            byte_count: 0,
            paragraph_count: 0,
        }
    }

    pub fn add_word(&mut self) {
        self.word_count += 1;
    }

    /// Record `n` bytes that were just written
    pub fn add_bytes(&mut self, n: usize) {
        self.byte_count += n;
    }

    /// Record a closed paragraph
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Whether the counter selected by the unit has reached the target
    pub fn limit_reached(&self) -> bool {
        let current = match self.unit {
            StopUnit::Words => self.word_count,
            StopUnit::Bytes => self.byte_count,
            StopUnit::Paragraphs => self.paragraph_count,
        };
        current >= self.target
    }

    pub fn unit(&self) -> StopUnit {
        self.unit
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Snapshot of all counters
    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            word_count: self.word_count,
            byte_count: self.byte_count,
            paragraph_count: self.paragraph_count,
        }
    }
}
