//! # Polarity Scores
//!
//! The three-part polarity score produced for each tweet and the category
//! predicates that classify it.

use serde::{Deserialize, Serialize};

/// Polarity scores for a single text.
///
/// Each component is non-negative. No fixed sum is guaranteed, although the
/// lexicon scorer normalizes its output so the components sum to 1 whenever
/// the text contains any token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Positive score component
    pub pos: f64,
    /// Negative score component
    pub neg: f64,
    /// Neutral score component
    pub neu: f64,
}

impl PolarityScores {
    /// Create a new polarity score triple
    pub fn new(pos: f64, neg: f64, neu: f64) -> Self {
        Self { pos, neg, neu }
    }

    /// Whether the text reads positive: the positive score is nonzero and
    /// strictly dominates the negative score.
    pub fn is_positive(&self) -> bool {
        self.pos > 0.0 && self.pos > self.neg
    }

    /// Whether the text reads negative: the negative score is nonzero and
    /// strictly dominates the positive score.
    pub fn is_negative(&self) -> bool {
        self.neg > 0.0 && self.neg > self.pos
    }

    /// Whether the text reads neutral: the neutral score is nonzero and
    /// strictly dominates both the positive and negative scores.
    ///
    /// The strict inequalities mean a perfect tie satisfies none of the
    /// three predicates, so a score triple can legitimately fall outside
    /// every category.
    pub fn is_neutral(&self) -> bool {
        self.neu > 0.0 && self.neu > self.neg && self.neu > self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_dominant() {
        let scores = PolarityScores::new(0.6, 0.0, 0.4);
        assert!(scores.is_positive());
        assert!(!scores.is_negative());
        assert!(!scores.is_neutral());
    }

    #[test]
    fn test_negative_dominant() {
        let scores = PolarityScores::new(0.0, 0.7, 0.3);
        assert!(!scores.is_positive());
        assert!(scores.is_negative());
        assert!(!scores.is_neutral());
    }

    #[test]
    fn test_neutral_dominant() {
        let scores = PolarityScores::new(0.1, 0.1, 0.8);
        assert!(!scores.is_positive());
        assert!(!scores.is_negative());
        assert!(scores.is_neutral());
    }

    #[test]
    fn test_pos_neg_tie_satisfies_neither() {
        for value in [0.0, 0.3, 0.5, 1.0] {
            let scores = PolarityScores::new(value, value, 0.0);
            assert!(!scores.is_positive(), "tie at {value} classified positive");
            assert!(!scores.is_negative(), "tie at {value} classified negative");
        }
    }

    #[test]
    fn test_positive_and_negative_mutually_exclusive() {
        let cases = [
            (0.0, 0.0, 0.0),
            (0.5, 0.5, 0.0),
            (0.6, 0.1, 0.3),
            (0.1, 0.6, 0.3),
            (0.33, 0.33, 0.34),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
        ];
        for (pos, neg, neu) in cases {
            let scores = PolarityScores::new(pos, neg, neu);
            assert!(
                !(scores.is_positive() && scores.is_negative()),
                "({pos}, {neg}, {neu}) classified both positive and negative"
            );
        }
    }

    #[test]
    fn test_three_way_tie_falls_through_all_categories() {
        let scores = PolarityScores::new(0.33, 0.33, 0.33);
        assert!(!scores.is_positive());
        assert!(!scores.is_negative());
        assert!(!scores.is_neutral());
    }

    #[test]
    fn test_all_zero_falls_through_all_categories() {
        let scores = PolarityScores::new(0.0, 0.0, 0.0);
        assert!(!scores.is_positive());
        assert!(!scores.is_negative());
        assert!(!scores.is_neutral());
    }

    #[test]
    fn test_neutral_requires_strict_dominance() {
        // neu ties with pos: not neutral, and pos still wins its own predicate
        let scores = PolarityScores::new(0.4, 0.2, 0.4);
        assert!(scores.is_positive());
        assert!(!scores.is_neutral());
    }
}
