// Punctuation Module
// Maps one uniform draw onto the mark written after a word.

/// What follows a word that did not end the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// `", "`, sentence continues
    Comma,
    /// `". "`, next word starts a sentence
    Sentence,
    /// `".\n"`, closes the paragraph
    Paragraph,
    /// `" "`
    Space,
}

impl Punctuation {
    /// Text written for this mark
    pub fn separator(&self) -> &'static str {
        match self {
            Punctuation::Comma => ", ",
            Punctuation::Sentence => ". ",
            Punctuation::Paragraph => ".\n",
            Punctuation::Space => " ",
        }
    }

    /// Whether the next word is capitalised
    pub fn starts_sentence(&self) -> bool {
        matches!(self, Punctuation::Sentence | Punctuation::Paragraph)
    }
}

/// One row of the policy table: draws at or above `lower` (and below the
/// previous row's bound) select `mark`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub mark: Punctuation,
}

/// Ordered probability bands evaluated against a single draw in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PunctuationPolicy {
    bands: Vec<Band>,
    fallback: Punctuation,
}

impl PunctuationPolicy {
    /// Build bands from conditional chances.
    ///
    /// Each chance applies to the probability mass not taken by the entries
    /// before it, the same as rolling an independent check per entry and
    /// stopping at the first hit. Bands are laid out downward from 1.0.
    pub fn from_chances(chances: &[(Punctuation, f64)], fallback: Punctuation) -> Self {
        let mut bands = Vec::with_capacity(chances.len());
        let mut upper = 1.0;
        let mut remaining = 1.0;

        for &(mark, chance) in chances {
            let width = remaining * chance.clamp(0.0, 1.0);
            upper -= width;
            remaining -= width;
            bands.push(Band { lower: upper, mark });
        }

        Self { bands, fallback }
    }

    /// 10% comma, then 10% sentence end, then 2% paragraph break, else a space
    pub fn classic() -> Self {
        Self::from_chances(
            &[
                (Punctuation::Comma, 0.10),
                (Punctuation::Sentence, 0.10),
                (Punctuation::Paragraph, 0.02),
            ],
            Punctuation::Space,
        )
    }

    /// Select the mark for `draw`
    pub fn choose(&self, draw: f64) -> Punctuation {
        self.bands
            .iter()
            .find(|band| draw >= band.lower)
            .map(|band| band.mark)
            .unwrap_or(self.fallback)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn fallback(&self) -> Punctuation {
        self.fallback
    }
}

impl Default for PunctuationPolicy {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_classic_bands() {
        let policy = PunctuationPolicy::classic();
        let bands = policy.bands();
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].mark, Punctuation::Comma);
        assert!(approx(bands[0].lower, 0.90));
        assert_eq!(bands[1].mark, Punctuation::Sentence);
        assert!(approx(bands[1].lower, 0.81));
        assert_eq!(bands[2].mark, Punctuation::Paragraph);
        assert!(approx(bands[2].lower, 0.7938));
        assert_eq!(policy.fallback(), Punctuation::Space);
    }

    #[test]
    fn test_classic_choose() {
        let policy = PunctuationPolicy::classic();
        assert_eq!(policy.choose(0.999), Punctuation::Comma);
        assert_eq!(policy.choose(0.95), Punctuation::Comma);
        assert_eq!(policy.choose(0.85), Punctuation::Sentence);
        assert_eq!(policy.choose(0.80), Punctuation::Paragraph);
        assert_eq!(policy.choose(0.79), Punctuation::Space);
        assert_eq!(policy.choose(0.0), Punctuation::Space);
    }

    #[test]
    fn test_band_widths_match_nested_checks() {
        let policy = PunctuationPolicy::classic();
        let bands = policy.bands();
        let comma = 1.0 - bands[0].lower;
        let sentence = bands[0].lower - bands[1].lower;
        let paragraph = bands[1].lower - bands[2].lower;
        assert!(approx(comma, 0.10));
        assert!(approx(sentence, 0.9 * 0.10));
        assert!(approx(paragraph, 0.9 * 0.9 * 0.02));
    }

    #[test]
    fn test_chances_are_clamped() {
        let policy = PunctuationPolicy::from_chances(
            &[(Punctuation::Paragraph, 1.5), (Punctuation::Comma, 0.5)],
            Punctuation::Space,
        );
        // The first entry takes all probability mass
        assert_eq!(policy.choose(0.0), Punctuation::Paragraph);
        assert_eq!(policy.choose(0.5), Punctuation::Paragraph);

        let never = PunctuationPolicy::from_chances(
            &[(Punctuation::Comma, -1.0)],
            Punctuation::Space,
        );
        assert_eq!(never.choose(0.999), Punctuation::Space);
    }

    #[test]
    fn test_separators() {
        assert_eq!(Punctuation::Comma.separator(), ", ");
        assert_eq!(Punctuation::Sentence.separator(), ". ");
        assert_eq!(Punctuation::Paragraph.separator(), ".\n");
        assert_eq!(Punctuation::Space.separator(), " ");
        assert!(Punctuation::Sentence.starts_sentence());
        assert!(Punctuation::Paragraph.starts_sentence());
        assert!(!Punctuation::Comma.starts_sentence());
        assert!(!Punctuation::Space.starts_sentence());
    }
}
