//! Tweet Sentiment CLI
//!
//! Performs sentiment analysis on a tweet dataset: classifies each tweet as
//! positive, negative or neutral, prints the top 10 tweets per category and
//! overall corpus metrics, and optionally draws a score-distribution
//! histogram.
//!
//! Usage:
//! ```
//! cargo run -- --dataset-path data/tweets.csv --limit 1000 --plot
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use tweet_sentiment::{
    analyze_tweets, defaults, load_tweets, top_n, AnalysedTweet, Histogram, LexiconScorer,
    Partition, SummaryReport,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Perform sentiment analysis on a dataset of tweets")]
struct Args {
    /// Path to the dataset CSV file
    #[arg(short, long)]
    dataset_path: PathBuf,

    /// Limit the number of records to analyze
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show score-distribution histograms
    #[arg(short, long)]
    plot: bool,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: Level = args.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to initialize logging")?;

    let tweets = load_tweets(&args.dataset_path)
        .with_context(|| format!("failed to load dataset {:?}", args.dataset_path))?;
    info!(count = tweets.len(), "dataset loaded");

    if let (Some(first), Some(last)) = (tweets.first(), tweets.last()) {
        if let (Some(start), Some(end)) = (first.datetime(), last.datetime()) {
            info!(%start, %end, "corpus time span");
        }
    }

    let scorer = LexiconScorer::new();
    let analysed =
        analyze_tweets(&scorer, tweets, args.limit).context("sentiment analysis failed")?;
    info!(count = analysed.len(), "tweets analysed");

    let partition = Partition::from_records(&analysed);

    print_top_tweets("negative", &partition.negative, |s| s.neg);
    print_top_tweets("positive", &partition.positive, |s| s.pos);
    print_top_tweets("neutral", &partition.neutral, |s| s.neu);

    let report = SummaryReport::summarize(&analysed, &partition.positive, &partition.negative)
        .context("failed to compute summary metrics")?;
    print_report(&report);

    if args.plot {
        print_histogram("positive", &partition.positive, |s| s.pos)?;
        print_histogram("negative", &partition.negative, |s| s.neg)?;
    }

    Ok(())
}

/// Print the top-N tweets of one category, ascending by score (highest last)
fn print_top_tweets<F>(category: &str, partition: &[&AnalysedTweet], selector: F)
where
    F: Fn(&tweet_sentiment::PolarityScores) -> f64,
{
    println!(
        "\n{}",
        format!("Top {} {category} tweets:", defaults::TOP_N).bold()
    );

    for record in top_n(partition, defaults::TOP_N, &selector) {
        println!(
            "{} score: {}, {}",
            capitalize(category),
            selector(&record.scores),
            record.tweet.text
        );
    }
}

/// Print the summary report, one field per line
fn print_report(report: &SummaryReport) {
    println!("\n{}", "=".repeat(60).blue());
    println!("Positive tweets ratio: {}%", report.positive_ratio);
    println!("Negative tweets ratio: {}%", report.negative_ratio);
    println!("Positive sentiment score: {}", report.positive_score_sum);
    println!("Negative sentiment score: {}", report.negative_score_sum);
    println!(
        "Positive sentiment score percentage: {}",
        report.positive_score_pct
    );
    println!(
        "Negative sentiment score percentage: {}",
        report.negative_score_pct
    );
    println!("Analysed tweets: {}", report.analysed_count);
    println!("Positive tweets: {}", report.positive_count);
    println!("Negative tweets: {}", report.negative_count);
}

/// Draw an ASCII histogram of one category's scores
fn print_histogram<F>(category: &str, partition: &[&AnalysedTweet], selector: F) -> Result<()>
where
    F: Fn(&tweet_sentiment::PolarityScores) -> f64,
{
    let scores: Vec<f64> = partition.iter().map(|r| selector(&r.scores)).collect();
    let histogram = Histogram::from_scores(&scores, defaults::HISTOGRAM_BINS)
        .with_context(|| format!("cannot plot {category} score distribution"))?;

    println!(
        "\n{}",
        format!("{} score distribution:", capitalize(category)).bold()
    );

    let max_count = histogram.max_count().max(1);
    for bin in &histogram.bins {
        let bar_len = bin.count * 40 / max_count;
        let bar = "#".repeat(bar_len);
        let bar = if category == "positive" {
            bar.green()
        } else {
            bar.red()
        };
        println!("{:>6.3} - {:<6.3} | {:>4} {}", bin.lower, bin.upper, bin.count, bar);
    }

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
