//! # lorem - Lorem ipsum generator
//!
//! Generates pseudo-random placeholder text bounded by a number of words,
//! bytes or paragraphs, optionally starting with the traditional
//! "Lorem ipsum dolor sit amet" phrase.
//!
//! ## Features
//!
//! - Streams text straight into any [`std::io::Write`] sink
//! - Word, byte and paragraph statistics for every run
//! - Auditable punctuation policy (commas, sentences, paragraph breaks)
//! - Injectable randomness for reproducible output
//!
//! ## Usage
//!
//! ### As a CLI
//!
//! ```bash
//! lorem -t w -n 42 --ipsum --stats
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use lorem::{Generator, StdRandom, StopUnit};
//!
//! let mut generator = Generator::with_source(
//!     Vec::new(),
//!     true,
//!     StopUnit::Words,
//!     12,
//!     StdRandom::seeded(42),
//! );
//! generator.generate().unwrap();
//!
//! let stats = generator.stats();
//! assert_eq!(stats.word_count, 12);
//!
//! let text = String::from_utf8(generator.into_inner()).unwrap();
//! assert!(text.starts_with("Lorem ipsum dolor sit amet, consectetur adipiscing elit. "));
//! assert_eq!(stats.byte_count, text.len());
//! ```

// Core library modules
pub mod dictionary;
pub mod errors;
pub mod generator;
pub mod limiter;
pub mod punctuation;
pub mod random;
pub mod stats;

// CLI module (for the `lorem` binary)
pub mod cli;

// Re-export commonly used types
pub use dictionary::{CANONICAL_PHRASE, DICTIONARY};
pub use errors::GenerateError;
pub use generator::Generator;
pub use limiter::{Limiter, ParseUnitError, StopUnit};
pub use punctuation::{Punctuation, PunctuationPolicy};
pub use random::{RandomSource, ScriptedSource, StdRandom};
pub use stats::GenerationStats;
