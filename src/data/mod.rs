//! # Data Module
//!
//! Tweet records, eligibility filtering and dataset loading.

mod loader;
mod tweet;

pub use loader::{load_tweets, DatasetError};
pub use tweet::{Tweet, REFERENCE_MARKER};
