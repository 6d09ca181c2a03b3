//! Review records and the values derived from them.
//!
//! Field names on the wire follow the dataset columns (`ReviewId`,
//! `ReviewBody`, `Location`, `Timestamp`), so the same [`Review`] type is used
//! to read the CSV dataset, answer write requests and build read responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Textual timestamp format used by the dataset and every JSON response.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format accepted by the `start_date` / `end_date` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stored customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub id: String,

    #[serde(rename = "ReviewBody")]
    pub body: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Polarity judgment for a piece of text.
///
/// `neg`, `neu` and `pos` are proportions of the text falling in each
/// category; `compound` is the normalized overall valence in `[-1, 1]` and is
/// the only field ranking looks at.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A review copy carrying its freshly computed sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScore,
}

/// Validated fields for a review that has not been stored yet.
///
/// Only [`crate::validate::validate_review`] builds these, so holding one
/// means the body is non-empty and the location is allow-listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub(crate) body: String,
    pub(crate) location: String,
}

impl ReviewDraft {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps.
pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
