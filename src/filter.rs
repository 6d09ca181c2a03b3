//! Location and date-range filtering over a review snapshot.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ReviewError;
use crate::model::{DATE_FORMAT, Review};

/// Conjunctive filter criteria. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    /// Build a filter from raw query values, treating empty strings as absent.
    ///
    /// Dates are `YYYY-MM-DD` and bound at midnight, so `end_date=2023-05-01`
    /// keeps reviews up to `2023-05-01 00:00:00` inclusive.
    pub fn from_params(
        location: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, ReviewError> {
        Ok(Self {
            location: non_empty(location).map(str::to_string),
            start: non_empty(start_date)
                .map(|raw| parse_date("start_date", raw))
                .transpose()?,
            end: non_empty(end_date)
                .map(|raw| parse_date("end_date", raw))
                .transpose()?,
        })
    }

    pub fn matches(&self, review: &Review) -> bool {
        if let Some(location) = &self.location {
            if review.location != *location {
                return false;
            }
        }
        if let Some(start) = self.start {
            if review.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if review.timestamp > end {
                return false;
            }
        }
        true
    }

    /// Keep the matching reviews, preserving their relative order.
    pub fn apply(&self, reviews: Vec<Review>) -> Vec<Review> {
        reviews.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDateTime, ReviewError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ReviewError::InvalidFilterValue {
            field,
            value: raw.to_string(),
        })
}
