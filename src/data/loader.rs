//! # Dataset Loader
//!
//! Loads tweet records from CSV datasets. The expected format uses a space
//! delimiter and `|` as the quote character, with `Text` and `Timestamp`
//! header columns.

use super::tweet::Tweet;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse record #{index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: csv::Error,
    },
}

/// Load tweet records from a CSV file, preserving file order.
///
/// Downstream classification and ranking rely on the original record order
/// for deterministic tie-breaking, so no sorting is applied here.
pub fn load_tweets<P: AsRef<Path>>(path: P) -> Result<Vec<Tweet>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .quote(b'|')
        .from_reader(file);

    let mut tweets = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let tweet: Tweet = result.map_err(|source| DatasetError::Parse { index, source })?;
        tweets.push(tweet);
    }

    debug!(count = tweets.len(), ?path, "loaded dataset");
    Ok(tweets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_tweets() {
        let file = write_dataset(
            "Text Timestamp\n\
             |good day!| 1598858830997\n\
             |bad day!| 1598858831001\n",
        );

        let tweets = load_tweets(file.path()).unwrap();
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].text, "good day!");
        assert_eq!(tweets[0].timestamp_ms, 1_598_858_830_997);
        assert_eq!(tweets[1].text, "bad day!");
    }

    #[test]
    fn test_order_preserved() {
        let file = write_dataset(
            "Text Timestamp\n\
             |later tweet| 2000\n\
             |earlier tweet| 1000\n",
        );

        let tweets = load_tweets(file.path()).unwrap();
        assert_eq!(tweets[0].text, "later tweet");
        assert_eq!(tweets[1].text, "earlier tweet");
    }

    #[test]
    fn test_missing_file() {
        let result = load_tweets("does/not/exist.csv");
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_malformed_record() {
        let file = write_dataset(
            "Text Timestamp\n\
             |no timestamp here| not_a_number\n",
        );

        let result = load_tweets(file.path());
        assert!(matches!(result, Err(DatasetError::Parse { index: 0, .. })));
    }
}
