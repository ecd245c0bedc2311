// Text Generator Module
// Streams lorem ipsum text to a writer until the limiter is satisfied.

use crate::dictionary::{CANONICAL_COMMA_AFTER, CANONICAL_PHRASE, DICTIONARY};
use crate::errors::GenerateError;
use crate::limiter::{Limiter, StopUnit};
use crate::punctuation::{Punctuation, PunctuationPolicy};
use crate::random::{RandomSource, StdRandom};
use crate::stats::GenerationStats;
use std::io::Write;

/// Resampling attempts when a pick repeats the previous word. With a
/// dictionary this size a second attempt almost always succeeds; past the
/// bound the following dictionary entry is taken.
const MAX_RESAMPLES: usize = 64;

/// How the text written so far ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Empty,
    Word,
    Break,
}

/// Single-shot lorem ipsum generator.
///
/// Text is written to the sink as it is produced. Once [`generate`] returns,
/// [`stats`] reports what was written.
///
/// [`generate`]: Generator::generate
/// [`stats`]: Generator::stats
pub struct Generator<W, R = StdRandom> {
    sink: W,
    start_with_lorem: bool,
    limiter: Limiter,
    random: R,
    policy: PunctuationPolicy,
}

impl<W: Write> Generator<W> {
    /// Create a generator seeded from OS entropy
    pub fn new(sink: W, start_with_lorem: bool, unit: StopUnit, target: usize) -> Self {
        Self::with_source(
            sink,
            start_with_lorem,
            unit,
            target,
            StdRandom::from_entropy(),
        )
    }
}

impl<W: Write, R: RandomSource> Generator<W, R> {
    /// Create a generator drawing from `random`
    pub fn with_source(
        sink: W,
        start_with_lorem: bool,
        unit: StopUnit,
        target: usize,
        random: R,
    ) -> Self {
        Self {
            sink,
            start_with_lorem,
            limiter: Limiter::new(unit, target),
            random,
            policy: PunctuationPolicy::classic(),
        }
    }

    /// Replace the punctuation policy
    pub fn with_policy(mut self, policy: PunctuationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Write text until the stop condition is met.
    ///
    /// A failed write aborts immediately; whatever reached the sink before
    /// the failure is left there.
    pub fn generate(&mut self) -> Result<(), GenerateError> {
        tracing::debug!(
            unit = %self.limiter.unit(),
            target = self.limiter.target(),
            start_with_lorem = self.start_with_lorem,
            "Starting generation"
        );

        let tail = self.write_body()?;
        self.close(tail)?;

        let stats = self.stats();
        tracing::debug!(
            words = stats.word_count,
            bytes = stats.byte_count,
            paragraphs = stats.paragraph_count,
            "Generation complete"
        );
        Ok(())
    }

    /// Counters for the run so far
    pub fn stats(&self) -> GenerationStats {
        self.limiter.stats()
    }

    /// Consume the generator and hand back the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_body(&mut self) -> Result<Tail, GenerateError> {
        if self.limiter.limit_reached() {
            return Ok(Tail::Empty);
        }

        // Separator owed before the next word. Only paragraph breaks are
        // written eagerly, so the text never ends on a dangling separator.
        let mut pending = None;
        if self.start_with_lorem {
            match self.write_canonical()? {
                Some(separator) => pending = Some(separator),
                None => return Ok(Tail::Word),
            }
        }

        let mut tail = Tail::Empty;
        let mut sentence_start = true;
        let mut previous = None;

        while !self.limiter.limit_reached() {
            let index = self.next_index(previous);
            previous = Some(index);

            let word = DICTIONARY[index];
            if sentence_start {
                self.write_word(pending.take(), &capitalize(word))?;
            } else {
                self.write_word(pending.take(), word)?;
            }
            tail = Tail::Word;

            if self.limiter.limit_reached() {
                break;
            }

            let mark = self.policy.choose(self.random.draw());
            sentence_start = mark.starts_sentence();
            if mark == Punctuation::Paragraph {
                self.emit(mark.separator())?;
                self.limiter.add_paragraph();
                tail = Tail::Break;
            } else {
                pending = Some(mark);
            }
        }

        Ok(tail)
    }

    /// Returns the separator owed after the phrase, or `None` if the limit
    /// was reached inside it.
    fn write_canonical(&mut self) -> Result<Option<Punctuation>, GenerateError> {
        let mut pending = None;
        for (position, word) in CANONICAL_PHRASE.iter().enumerate() {
            self.write_word(pending.take(), word)?;
            if self.limiter.limit_reached() {
                return Ok(None);
            }

            let written = position + 1;
            pending = Some(if written == CANONICAL_PHRASE.len() {
                Punctuation::Sentence
            } else if written == CANONICAL_COMMA_AFTER {
                Punctuation::Comma
            } else {
                Punctuation::Space
            });
        }
        Ok(pending)
    }

    fn close(&mut self, tail: Tail) -> Result<(), GenerateError> {
        // A trailing break already closed its paragraph
        if tail == Tail::Word {
            self.emit(".")?;
            self.limiter.add_paragraph();
        }
        Ok(())
    }

    fn next_index(&mut self, previous: Option<usize>) -> usize {
        let len = DICTIONARY.len();
        let Some(previous) = previous else {
            return self.random.pick(len);
        };

        for _ in 0..MAX_RESAMPLES {
            let index = self.random.pick(len);
            if index != previous {
                return index;
            }
            tracing::trace!(index, "Resampling repeated word");
        }
        (previous + 1) % len
    }

    fn write_word(
        &mut self,
        separator: Option<Punctuation>,
        word: &str,
    ) -> Result<(), GenerateError> {
        if let Some(mark) = separator {
            self.emit(mark.separator())?;
        }
        self.emit(word)?;
        self.limiter.add_word();
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<(), GenerateError> {
        self.sink.write_all(text.as_bytes())?;
        self.limiter.add_bytes(text.len());
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
