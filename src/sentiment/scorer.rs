//! # Polarity Scorer
//!
//! The scoring boundary consumed by the analysis pipeline, plus the default
//! lexicon-backed implementation.

use super::lexicon::ValenceLexicon;
use super::score::PolarityScores;
use thiserror::Error;

/// Error raised when a scorer backend fails for a given text
#[derive(Error, Debug, Clone)]
#[error("polarity scoring failed: {reason}")]
pub struct ScoringError {
    /// Backend-specific failure description
    pub reason: String,
}

impl ScoringError {
    /// Create a new scoring error
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Capability that scores the emotional polarity of a text.
///
/// Constructed once and passed explicitly into the pipeline so tests can
/// substitute a canned scorer for the lexicon-backed one.
pub trait PolarityScorer {
    /// Score a single text, returning its polarity triple
    fn score(&self, text: &str) -> Result<PolarityScores, ScoringError>;
}

/// Lexicon-backed polarity scorer.
///
/// Folds per-token valences into a {pos, neg, neu} proportion triple:
/// positive tokens contribute `valence + 1` to the positive mass, negative
/// tokens `|valence| + 1` to the negative mass, and tokens absent from the
/// lexicon count 1 toward the neutral mass. The masses are normalized by
/// their total, so the triple sums to 1 whenever the text has any token.
pub struct LexiconScorer {
    /// Valence lexicon backing the scorer
    lexicon: ValenceLexicon,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the default lexicon
    pub fn new() -> Self {
        Self {
            lexicon: ValenceLexicon::new(),
        }
    }

    /// Create a scorer backed by a custom lexicon
    pub fn with_lexicon(lexicon: ValenceLexicon) -> Self {
        Self { lexicon }
    }

    /// Valence of a single token with negation and intensification applied
    fn token_valence(&self, token: &str, negate: bool, intensity: f64) -> Option<f64> {
        let mut valence = self.lexicon.valence(token)?;
        if negate {
            valence = -valence;
        }
        Some((valence * intensity).clamp(-1.0, 1.0))
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neu_mass = 0.0;

        let mut negate_next = false;
        let mut intensity: f64 = 1.0;

        for raw_token in text.split_whitespace() {
            let token = raw_token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if token.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(token) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.lexicon.intensifier(token) {
                intensity = mult;
                continue;
            }

            match self.token_valence(token, negate_next, intensity) {
                Some(valence) if valence > 0.0 => pos_mass += valence + 1.0,
                Some(valence) if valence < 0.0 => neg_mass += -valence + 1.0,
                Some(_) => neu_mass += 1.0,
                None => neu_mass += 1.0,
            }

            negate_next = false;
            intensity = 1.0;
        }

        let total = pos_mass + neg_mass + neu_mass;
        if total == 0.0 {
            return Ok(PolarityScores::new(0.0, 0.0, 0.0));
        }

        Ok(PolarityScores::new(
            pos_mass / total,
            neg_mass / total,
            neu_mass / total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("what a great and wonderful day").unwrap();
        assert!(scores.pos > scores.neg);
        assert!(scores.is_positive());
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("this is a terrible horrible mess").unwrap();
        assert!(scores.neg > scores.pos);
        assert!(scores.is_negative());
    }

    #[test]
    fn test_neutral_text() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("the meeting is scheduled for tomorrow").unwrap();
        assert_eq!(scores.pos, 0.0);
        assert_eq!(scores.neg, 0.0);
        assert!(scores.is_neutral());
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("").unwrap();
        assert_eq!(scores, PolarityScores::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_components_sum_to_one() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("good day bad day plain day").unwrap();
        let sum = scores.pos + scores.neg + scores.neu;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_valence() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("the show was good").unwrap();
        let negated = scorer.score("the show was not good").unwrap();
        assert!(plain.pos > 0.0);
        assert_eq!(negated.pos, 0.0);
        assert!(negated.neg > 0.0);
    }

    #[test]
    fn test_intensifier_raises_mass() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("good").unwrap();
        let intense = scorer.score("extremely good").unwrap();
        assert!(intense.pos >= plain.pos);
    }

    #[test]
    fn test_punctuation_stripped() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("good!!!").unwrap();
        assert!(scores.pos > 0.0);
    }

    #[test]
    fn test_scores_non_negative() {
        let scorer = LexiconScorer::new();
        for text in ["not good", "never happy again", "hate hate hate"] {
            let scores = scorer.score(text).unwrap();
            assert!(scores.pos >= 0.0);
            assert!(scores.neg >= 0.0);
            assert!(scores.neu >= 0.0);
        }
    }
}
