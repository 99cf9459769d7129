//! # Score Histogram
//!
//! Equal-width binning of category scores for the optional distribution
//! chart. The histogram itself is render-agnostic; the CLI draws it as
//! ASCII bars.

use super::AnalysisError;

/// A single histogram bucket
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower bound
    pub lower: f64,
    /// Upper bound (inclusive for the last bin)
    pub upper: f64,
    /// Number of values in the bucket
    pub count: usize,
}

/// Equal-width histogram over a sequence of scores
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Buckets in ascending value order
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets spanning [min, max].
    ///
    /// Fails with [`AnalysisError::EmptyPartition`] on empty input: a chart
    /// over an empty partition would be misleading, so the condition is
    /// surfaced instead. When all values are equal the span collapses and
    /// every value lands in the first bucket.
    pub fn from_scores(values: &[f64], bins: usize) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyPartition);
        }

        let bins = bins.max(1);
        let min = values.iter().fold(f64::INFINITY, |acc, v| acc.min(*v));
        let max = values.iter().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));
        let span = max - min;
        let width = if span > 0.0 { span / bins as f64 } else { 1.0 };

        let mut counts = vec![0usize; bins];
        for value in values {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count,
            })
            .collect();

        Ok(Self { bins })
    }

    /// Largest bucket count, used to scale rendered bars
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
