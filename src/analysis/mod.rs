//! # Analysis Module
//!
//! The classification-and-aggregation pipeline: scoring eligible tweets,
//! partitioning them by category, summary metrics, top-N ranking and
//! histogram binning.

mod classify;
mod histogram;
mod pipeline;
mod rank;
mod report;

use thiserror::Error;

pub use classify::Partition;
pub use histogram::{Histogram, HistogramBin};
pub use pipeline::{analyze_tweets, AnalysedTweet};
pub use rank::top_n;
pub use report::SummaryReport;

/// Errors raised by the aggregate reporter and histogram consumers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analysed corpus is empty, so ratio denominators are zero
    #[error("cannot summarize an empty corpus")]
    EmptyCorpus,

    /// Both summed category scores are zero, so the percentage split is undefined
    #[error("positive and negative score sums are both zero")]
    ZeroScoreTotal,

    /// A histogram was requested over an empty category partition
    #[error("cannot build a histogram from an empty partition")]
    EmptyPartition,
}
