//! # Aggregate Reporter
//!
//! Corpus-wide summary metrics: category ratios, summed category scores and
//! the percentage split between them.

use super::pipeline::AnalysedTweet;
use super::AnalysisError;
use serde::Serialize;

/// Summary metrics over one analysed corpus.
///
/// Pure data value, computed fresh each run. The two ratios need not sum to
/// 100 because the categories are not guaranteed to cover the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Percentage of analysed tweets classified positive
    pub positive_ratio: f64,
    /// Percentage of analysed tweets classified negative
    pub negative_ratio: f64,
    /// Sum of positive scores over the positive partition
    pub positive_score_sum: f64,
    /// Sum of negative scores over the negative partition
    pub negative_score_sum: f64,
    /// Positive share of the combined score sums, as a percentage
    pub positive_score_pct: f64,
    /// Negative share of the combined score sums, complement to 100
    pub negative_score_pct: f64,
    /// Number of analysed tweets
    pub analysed_count: usize,
    /// Number of positive tweets
    pub positive_count: usize,
    /// Number of negative tweets
    pub negative_count: usize,
}

impl SummaryReport {
    /// Compute summary metrics from the corpus and its two polar partitions.
    ///
    /// Fails with [`AnalysisError::EmptyCorpus`] when `all` is empty and
    /// with [`AnalysisError::ZeroScoreTotal`] when both score sums are
    /// exactly zero. Both conditions are surfaced rather than coerced to a
    /// 0% or 100% figure.
    pub fn summarize(
        all: &[AnalysedTweet],
        positive: &[&AnalysedTweet],
        negative: &[&AnalysedTweet],
    ) -> Result<Self, AnalysisError> {
        if all.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }

        let analysed_count = all.len();
        let positive_ratio = 100.0 * positive.len() as f64 / analysed_count as f64;
        let negative_ratio = 100.0 * negative.len() as f64 / analysed_count as f64;

        let positive_score_sum: f64 = positive.iter().map(|r| r.scores.pos).sum();
        let negative_score_sum: f64 = negative.iter().map(|r| r.scores.neg).sum();

        let combined = positive_score_sum + negative_score_sum;
        if combined == 0.0 {
            return Err(AnalysisError::ZeroScoreTotal);
        }

        let positive_score_pct = 100.0 * positive_score_sum / combined;
        let negative_score_pct = 100.0 - positive_score_pct;

        Ok(Self {
            positive_ratio,
            negative_ratio,
            positive_score_sum,
            negative_score_sum,
            positive_score_pct,
            negative_score_pct,
            analysed_count,
            positive_count: positive.len(),
            negative_count: negative.len(),
        })
    }
}
