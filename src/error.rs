//! Error types produced by the review pipeline.
//!
//! Every [`ReviewError`] is caller-correctable: the HTTP layer maps all of
//! them to `400 Bad Request` and uses the `Display` text as the `error` field
//! of the response body, so the messages here are part of the wire contract.
//!
//! | Error | Raised by | Message |
//! |-------|-----------|---------|
//! | [`InvalidFilterValue`](ReviewError::InvalidFilterValue) | filter | names the parameter and expected format |
//! | [`MissingFields`](ReviewError::MissingFields) | validation | `ReviewBody and Location are required` |
//! | [`LocationNotAllowed`](ReviewError::LocationNotAllowed) | validation | `Location not allowed` |
//! | [`MalformedRequestBody`](ReviewError::MalformedRequestBody) | form decoding | describes the decode failure |

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidFilterValue { field: &'static str, value: String },

    #[error("ReviewBody and Location are required")]
    MissingFields,

    #[error("Location not allowed")]
    LocationNotAllowed,

    #[error("Malformed request body: {0}")]
    MalformedRequestBody(String),
}

/// Failures while bulk-loading the startup dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}
