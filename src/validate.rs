//! Write-payload validation.

use crate::error::ReviewError;
use crate::locations::is_allowed_location;
use crate::model::ReviewDraft;

/// Check raw write fields and turn them into a [`ReviewDraft`].
///
/// The allow-list check runs first: a payload with a bad location and a
/// missing body reports [`ReviewError::LocationNotAllowed`].
pub fn validate_review(body: &str, location: &str) -> Result<ReviewDraft, ReviewError> {
    if !location.is_empty() && !is_allowed_location(location) {
        return Err(ReviewError::LocationNotAllowed);
    }
    if body.is_empty() || location.is_empty() {
        return Err(ReviewError::MissingFields);
    }
    Ok(ReviewDraft {
        body: body.to_string(),
        location: location.to_string(),
    })
}
