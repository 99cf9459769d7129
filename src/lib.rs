//! # Tweet Sentiment
//!
//! Library for lexicon-based sentiment analysis of tweet datasets
//! with category classification and aggregate reporting.
//!
//! ## Modules
//!
//! - `data` - Tweet records, eligibility filtering and CSV dataset loading
//! - `sentiment` - Polarity scoring and the lexicon scorer
//! - `analysis` - Classification, partitioning, ranking and summary metrics
//!
//! ## Example Usage
//!
//! ```no_run
//! use tweet_sentiment::{
//!     analyze_tweets, load_tweets, LexiconScorer, Partition, SummaryReport,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let tweets = load_tweets("data/tweets.csv")?;
//!
//!     let scorer = LexiconScorer::new();
//!     let analysed = analyze_tweets(&scorer, tweets, None)?;
//!
//!     let partition = Partition::from_records(&analysed);
//!     let report = SummaryReport::summarize(
//!         &analysed,
//!         &partition.positive,
//!         &partition.negative,
//!     )?;
//!
//!     println!("Positive tweets ratio: {}%", report.positive_ratio);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod data;
pub mod sentiment;

// Re-exports for convenience
pub use analysis::{
    analyze_tweets, top_n, AnalysedTweet, AnalysisError, Histogram, HistogramBin, Partition,
    SummaryReport,
};
pub use data::{load_tweets, DatasetError, Tweet, REFERENCE_MARKER};
pub use sentiment::{LexiconScorer, PolarityScorer, PolarityScores, ScoringError, ValenceLexicon};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Number of top-ranked tweets reported per category
    pub const TOP_N: usize = 10;

    /// Bin count for the score-distribution histogram
    pub const HISTOGRAM_BINS: usize = 20;
}
