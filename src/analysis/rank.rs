//! # Top-N Ranker
//!
//! Extracts the highest-scoring records from a category partition.

use super::pipeline::AnalysedTweet;
use crate::sentiment::PolarityScores;

/// Return the `n` highest-scoring records of a partition, ascending by the
/// selected score so the highest comes last.
///
/// The sort is stable, so ties keep their original input order. `n = 0`
/// yields an empty result; `n` larger than the partition yields the whole
/// partition in ascending order, and an empty partition yields an empty
/// result.
pub fn top_n<'a, F>(partition: &[&'a AnalysedTweet], n: usize, selector: F) -> Vec<&'a AnalysedTweet>
where
    F: Fn(&PolarityScores) -> f64,
{
    let mut ranked: Vec<&AnalysedTweet> = partition.to_vec();
    ranked.sort_by(|a, b| selector(&a.scores).total_cmp(&selector(&b.scores)));

    let skip = ranked.len().saturating_sub(n);
    ranked.split_off(skip)
}
