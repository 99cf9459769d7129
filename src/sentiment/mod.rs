//! # Sentiment Module
//!
//! Polarity scores and the lexicon-based scorer.

mod lexicon;
mod score;
mod scorer;

pub use lexicon::ValenceLexicon;
pub use score::PolarityScores;
pub use scorer::{LexiconScorer, PolarityScorer, ScoringError};
