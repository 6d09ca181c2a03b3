//! Customer review collection with filtering, validation and sentiment ranking.
//!
//! This crate holds everything the HTTP service does besides HTTP:
//!
//! - [`ReviewStore`]: append-only, lock-protected review collection
//! - [`ReviewFilter`]: location and date-range narrowing of a snapshot
//! - [`rank_reviews`]: per-review sentiment scoring and stable ranking
//! - [`validate_review`]: write-payload checks against the location allow-list
//! - [`SentimentScorer`] / [`LexiconScorer`]: pluggable text scoring
//! - [`dataset::load_csv`]: bulk loading of the startup dataset
//!
//! # Example
//!
//! ```rust
//! use reviews::{rank_reviews, validate_review, LexiconScorer, ReviewFilter, ReviewStore};
//!
//! let store = ReviewStore::new();
//! let draft = validate_review("Great stay", "Denver, Colorado").unwrap();
//! store.append(draft);
//!
//! let filter = ReviewFilter::from_params(Some("Denver, Colorado"), None, None).unwrap();
//! let ranked = rank_reviews(filter.apply(store.snapshot()), &LexiconScorer::new());
//! assert_eq!(ranked.len(), 1);
//! assert!(ranked[0].sentiment.compound > 0.0);
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod locations;
pub mod model;
pub mod rank;
pub mod sentiment;
pub mod store;
pub mod validate;

pub use error::{DatasetError, ReviewError};
pub use filter::ReviewFilter;
pub use locations::{ALLOWED_LOCATIONS, is_allowed_location};
pub use model::{Review, ReviewDraft, ScoredReview, SentimentScore, TIMESTAMP_FORMAT};
pub use rank::rank_reviews;
pub use sentiment::{LexiconScorer, SentimentScorer};
pub use store::ReviewStore;
pub use validate::validate_review;
