//! # Tweet Records
//!
//! Raw tweet record type and the eligibility filter applied before scoring.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Marker substring identifying tweets that merely reference another tweet
/// (quotes, replies with an embedded short link). Such tweets carry no
/// independent sentiment of their own and are excluded from analysis.
pub const REFERENCE_MARKER: &str = "https://t.co";

/// A raw tweet as loaded from the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet text content
    #[serde(rename = "Text")]
    pub text: String,
    /// Publication time, milliseconds since the Unix epoch
    #[serde(rename = "Timestamp")]
    pub timestamp_ms: i64,
}

impl Tweet {
    /// Create a new tweet record
    pub fn new(text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            text: text.into(),
            timestamp_ms,
        }
    }

    /// Whether this tweet is eligible for independent sentiment judgment.
    ///
    /// Tweets containing the reference marker only point at another tweet
    /// and are dropped from the corpus entirely. An empty text is eligible.
    pub fn is_eligible(&self) -> bool {
        !self.text.contains(REFERENCE_MARKER)
    }

    /// Publication time as a UTC datetime, if the timestamp is representable
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tweet_is_eligible() {
        let tweet = Tweet::new("what a lovely morning", 1_598_858_830_997);
        assert!(tweet.is_eligible());
    }

    #[test]
    fn test_reference_marker_excluded() {
        let tweet = Tweet::new("look at this https://t.co/abc123", 1_598_858_830_997);
        assert!(!tweet.is_eligible());
    }

    #[test]
    fn test_empty_text_is_eligible() {
        let tweet = Tweet::new("", 0);
        assert!(tweet.is_eligible());
    }

    #[test]
    fn test_datetime_conversion() {
        let tweet = Tweet::new("hello", 1_598_858_830_997);
        let dt = tweet.datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_598_858_830_997);
    }
}
