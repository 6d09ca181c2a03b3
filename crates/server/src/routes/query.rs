use crate::error::ServerResult;
use crate::routes::{form_value, json_response};
use crate::state::ServerState;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Response;
use reviews::{rank_reviews, ReviewFilter};
use std::sync::Arc;

/// Query parameters for the review listing; empty values count as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    /// Parse a raw query string, keeping the first value of repeated keys.
    pub fn parse(raw: &str) -> Self {
        let field = |key| form_value(raw.as_bytes(), key).filter(|v| !v.is_empty());
        Self {
            location: field("location"),
            start_date: field("start_date"),
            end_date: field("end_date"),
        }
    }

    pub fn to_filter(&self) -> Result<ReviewFilter, reviews::ReviewError> {
        ReviewFilter::from_params(
            self.location.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }
}

/// List reviews, filtered by the query and ranked by descending sentiment
///
/// Filtering and scoring run on the blocking pool so the request timeout can
/// still answer while a slow scorer is working.
pub async fn list_reviews(
    State(state): State<Arc<ServerState>>,
    RawQuery(raw): RawQuery,
) -> ServerResult<Response> {
    let query = ReviewQuery::parse(raw.as_deref().unwrap_or_default());
    let filter = query.to_filter()?;

    let ranked = tokio::task::spawn_blocking(move || {
        let matched = filter.apply(state.store.snapshot());
        rank_reviews(matched, state.scorer.as_ref())
    })
    .await?;

    tracing::debug!(
        location = ?query.location,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        results = ranked.len(),
        "reviews listed"
    );

    Ok(json_response(StatusCode::OK, &ranked))
}
