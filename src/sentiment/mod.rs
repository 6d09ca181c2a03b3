//! Sentiment scoring.
//!
//! The ranking stage only needs something implementing [`SentimentScorer`];
//! the server injects [`LexiconScorer`] at startup and tests swap in fixed
//! tables so orderings can be asserted exactly.

mod lexicon;

pub use lexicon::LexiconScorer;

use crate::model::SentimentScore;

/// Pure, deterministic text-to-sentiment function.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> SentimentScore + Send + Sync,
{
    fn score(&self, text: &str) -> SentimentScore {
        self(text)
    }
}
