//! Generation statistics.
//!
//! A [`GenerationStats`] is a copied-out snapshot of the limiter counters,
//! safe to keep after the generator is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters collected during one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Words written, canonical phrase included
    pub word_count: usize,
    /// Bytes written to the sink
    pub byte_count: usize,
    /// Paragraphs closed, by a paragraph break or the final period
    pub paragraph_count: usize,
}

impl GenerationStats {
    /// Render as a single-line JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STATS:")?;
        writeln!(f, "Words      {}", self.word_count)?;
        writeln!(f, "Bytes      {}", self.byte_count)?;
        writeln!(f, "Paragraphs {}", self.paragraph_count)
    }
}
