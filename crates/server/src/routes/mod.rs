//! API route handlers
//!
//! Every path serves the same review collection; the HTTP method picks the
//! operation:
//!
//! - `GET`: filtered, sentiment-ranked listing ([`query::list_reviews`])
//! - `POST`: validated append ([`submit::create_review`])
//! - anything else: `405` via [`method_not_allowed`]

pub mod query;
pub mod submit;

use crate::error::ServerError;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::io;

const SERIALIZATION_FAILED: &[u8] = br#"{"error": "Internal server error"}"#;

/// Serialize `value` as 2-space indented JSON with an exact `Content-Length`.
pub fn json_response<T>(status: StatusCode, value: &T) -> Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec_pretty(value) {
        Ok(body) => with_json_headers(status, body),
        Err(err) => serialization_failed(err),
    }
}

/// Serialize `value` on one line, separating items with `", "` and keys
/// from values with `": "`.
pub fn compact_json_response<T>(status: StatusCode, value: &T) -> Response
where
    T: Serialize + ?Sized,
{
    let mut body = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, SpacedFormatter);
    match value.serialize(&mut serializer) {
        Ok(()) => with_json_headers(status, body),
        Err(err) => serialization_failed(err),
    }
}

struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn serialization_failed(err: serde_json::Error) -> Response {
    tracing::error!(error = %err, "failed to serialize response body");
    with_json_headers(
        StatusCode::INTERNAL_SERVER_ERROR,
        SERIALIZATION_FAILED.to_vec(),
    )
}

fn with_json_headers(status: StatusCode, body: Vec<u8>) -> Response {
    let length = HeaderValue::from(body.len());
    (
        status,
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (CONTENT_LENGTH, length),
        ],
        body,
    )
        .into_response()
}

/// First value for `key` in URL-encoded `input`, `+` and `%XX` decoded.
pub(crate) fn form_value(input: &[u8], key: &str) -> Option<String> {
    url::form_urlencoded::parse(input)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// 405 handler for methods other than GET and POST.
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
