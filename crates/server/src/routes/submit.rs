use crate::error::{ServerError, ServerResult};
use crate::routes::{form_value, json_response};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use reviews::{validate_review, ReviewError};
use std::sync::Arc;

/// URL-encoded write payload. Missing keys decode to empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub review_body: String,
    pub location: String,
}

impl ReviewForm {
    pub fn parse(body: &[u8]) -> Result<Self, ReviewError> {
        std::str::from_utf8(body)
            .map_err(|e| ReviewError::MalformedRequestBody(format!("body is not UTF-8: {e}")))?;
        Ok(Self {
            review_body: form_value(body, "ReviewBody").unwrap_or_default(),
            location: form_value(body, "Location").unwrap_or_default(),
        })
    }
}

/// Validate and append a new review
pub async fn create_review(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Response> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_kb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    let form = ReviewForm::parse(&body)?;
    let draft = validate_review(&form.review_body, &form.location)?;
    let review = state.store.append(draft);

    tracing::info!(
        review_id = %review.id,
        location = %review.location,
        "review created"
    );

    Ok(json_response(StatusCode::CREATED, &review))
}
