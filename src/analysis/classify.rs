//! # Corpus Partitioner
//!
//! Splits an analysed corpus into positive, negative and neutral partitions
//! using the category predicates on each record's polarity scores.

use super::pipeline::AnalysedTweet;

/// Category partitions over an analysed corpus.
///
/// Each partition borrows from the input slice, so a record that satisfies
/// more than one predicate is shared rather than copied. The three
/// predicates are evaluated independently; under their strict inequalities
/// a record can also fall outside every partition, so the partitions need
/// not cover the corpus.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Records whose positive score strictly dominates
    pub positive: Vec<&'a AnalysedTweet>,
    /// Records whose negative score strictly dominates
    pub negative: Vec<&'a AnalysedTweet>,
    /// Records whose neutral score strictly dominates both others
    pub neutral: Vec<&'a AnalysedTweet>,
}

impl<'a> Partition<'a> {
    /// Partition a corpus in a single pass, preserving input order within
    /// each partition. An empty corpus yields three empty partitions.
    pub fn from_records(records: &'a [AnalysedTweet]) -> Self {
        let mut partition = Partition::default();

        for record in records {
            if record.scores.is_positive() {
                partition.positive.push(record);
            }
            if record.scores.is_negative() {
                partition.negative.push(record);
            }
            if record.scores.is_neutral() {
                partition.neutral.push(record);
            }
        }

        partition
    }
}
