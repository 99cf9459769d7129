//! # Analysis Pipeline
//!
//! Runs the filter-then-score pass that turns raw tweets into analysed
//! records ready for partitioning.

use crate::data::Tweet;
use crate::sentiment::{PolarityScorer, PolarityScores, ScoringError};
use tracing::debug;

/// A tweet paired with its polarity scores
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysedTweet {
    /// The underlying tweet record
    pub tweet: Tweet,
    /// Polarity scores produced by the scorer
    pub scores: PolarityScores,
}

/// Filter and score a raw tweet stream.
///
/// Records at ordinal position `>= limit` are excluded before anything else
/// happens, so `Some(0)` yields an empty corpus. Ineligible tweets are
/// dropped silently and never reach the scorer; they do not count toward any
/// downstream denominator. Output order matches input order.
///
/// A scorer failure aborts the run; callers wanting skip-and-continue
/// semantics must wrap the scorer themselves.
pub fn analyze_tweets<S: PolarityScorer>(
    scorer: &S,
    tweets: Vec<Tweet>,
    limit: Option<usize>,
) -> Result<Vec<AnalysedTweet>, ScoringError> {
    let mut analysed = Vec::new();

    for (index, tweet) in tweets.into_iter().enumerate() {
        if let Some(limit) = limit {
            if index >= limit {
                break;
            }
        }

        if !tweet.is_eligible() {
            debug!(index, "skipping reference-only tweet");
            continue;
        }

        debug!(index, "analyzing tweet");
        let scores = scorer.score(&tweet.text)?;
        analysed.push(AnalysedTweet { tweet, scores });
    }

    Ok(analysed)
}
