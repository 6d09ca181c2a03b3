//! Integration tests for the review HTTP API
//!
//! These drive the full router (middleware included) with `oneshot`, using a
//! fixed score table so orderings are exact.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{Local, NaiveDateTime};
use http_body_util::BodyExt;
use reviews::{Review, ReviewStore, SentimentScore, SentimentScorer};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

fn review(id: &str, body: &str, location: &str, timestamp: &str) -> Review {
    Review {
        id: id.to_string(),
        body: body.to_string(),
        location: location.to_string(),
        timestamp: ts(timestamp),
    }
}

/// Scores looked up by exact body text; unknown text scores zero.
fn score_table(entries: &[(&str, f64)]) -> Arc<dyn SentimentScorer> {
    let table: HashMap<String, f64> = entries.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    Arc::new(move |text: &str| {
        let compound = table.get(text).copied().unwrap_or(0.0);
        SentimentScore {
            neg: if compound < 0.0 { 1.0 } else { 0.0 },
            neu: if compound == 0.0 { 1.0 } else { 0.0 },
            pos: if compound > 0.0 { 1.0 } else { 0.0 },
            compound,
        }
    })
}

fn seeded_reviews() -> Vec<Review> {
    vec![
        review("r1", "fine", "Denver, Colorado", "2023-02-10 08:00:00"),
        review("r2", "great", "Phoenix, Arizona", "2023-05-01 12:30:00"),
        review("r3", "awful", "Denver, Colorado", "2023-09-21 19:15:45"),
    ]
}

fn create_test_app_with(config: ServerConfig, reviews: Vec<Review>) -> Router {
    let scorer = score_table(&[
        ("fine", 0.2),
        ("great", 0.9),
        ("awful", -0.7),
        ("Great stay", 0.8),
    ]);
    let state = ServerState::new(config, ReviewStore::from_reviews(reviews), scorer);
    build_router(Arc::new(state))
}

fn create_test_app() -> Router {
    create_test_app_with(ServerConfig::default(), seeded_reviews())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(CONTENT_LENGTH, body.len())
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).expect("response body is JSON")
}

fn ids(body: &Bytes) -> Vec<String> {
    json(body)
        .as_array()
        .expect("array body")
        .iter()
        .map(|r| r["ReviewId"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn get_without_params_ranks_all_by_sentiment() {
    let app = create_test_app();
    let (status, headers, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    assert_eq!(ids(&body), vec!["r2", "r1", "r3"]);

    let first = &json(&body)[0];
    assert_eq!(first["ReviewBody"], "great");
    assert_eq!(first["Location"], "Phoenix, Arizona");
    assert_eq!(first["Timestamp"], "2023-05-01 12:30:00");
    assert_eq!(first["sentiment"]["compound"], 0.9);
    assert_eq!(first["sentiment"]["pos"], 1.0);
}

#[tokio::test]
async fn get_filters_by_location() {
    let app = create_test_app();
    let (status, _, body) = send(&app, get("/?location=Denver,%20Colorado")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["r1", "r3"]);
    for item in json(&body).as_array().unwrap() {
        assert_eq!(item["Location"], "Denver, Colorado");
    }
}

#[tokio::test]
async fn get_filters_by_date_range() {
    let app = create_test_app();
    let (status, _, body) =
        send(&app, get("/?start_date=2023-03-01&end_date=2023-12-31")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["r2", "r3"]);
}

#[tokio::test]
async fn get_with_inverted_range_returns_empty_array() {
    let app = create_test_app();
    let (status, _, body) = send(&app, get("/?start_date=2024-01-01&end_date=2023-01-01")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn get_with_malformed_date_is_bad_request() {
    let app = create_test_app();
    let (status, headers, body) = send(&app, get("/?start_date=03/01/2023")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    let error = json(&body);
    assert_eq!(
        error["error"],
        "Invalid start_date '03/01/2023': expected YYYY-MM-DD"
    );
    assert_eq!(error.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn get_is_served_on_any_path() {
    let app = create_test_app();
    let (status, _, body) = send(&app, get("/reviews/latest?location=Phoenix%2C+Arizona")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["r2"]);
}

#[tokio::test]
async fn repeated_get_is_byte_identical() {
    let app = create_test_app();
    let (_, _, first) = send(&app, get("/?location=Denver%2C+Colorado")).await;
    let (_, _, second) = send(&app, get("/?location=Denver%2C+Colorado")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn content_length_matches_body() {
    let app = create_test_app();
    for request in [get("/"), post_form("Location=Atlantis")] {
        let (_, headers, body) = send(&app, request).await;
        let declared: usize = headers[CONTENT_LENGTH].to_str().unwrap().parse().unwrap();
        assert_eq!(declared, body.len());
    }
}

#[tokio::test]
async fn post_creates_review_visible_to_get() {
    let app = create_test_app();
    let before = Local::now().naive_local();
    let (status, headers, body) =
        send(&app, post_form("ReviewBody=Great stay&Location=Denver, Colorado")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[CONTENT_TYPE], "application/json");

    let created: Review = serde_json::from_slice(&body).expect("review JSON");
    assert_eq!(created.body, "Great stay");
    assert_eq!(created.location, "Denver, Colorado");
    assert!(!["r1", "r2", "r3"].contains(&created.id.as_str()));
    let skew = (created.timestamp - before).num_seconds().abs();
    assert!(skew <= 5, "timestamp {} is not current", created.timestamp);
    assert!(json(&body).get("sentiment").is_none());

    let (_, _, listing) = send(&app, get("/?location=Denver%2C+Colorado")).await;
    assert_eq!(ids(&listing), vec![created.id.clone(), "r1".into(), "r3".into()]);
}

#[tokio::test]
async fn post_decodes_urlencoded_fields() {
    let app = create_test_app();
    let (status, _, body) = send(
        &app,
        post_form("ReviewBody=Quiet+rooms+%26+fast+wifi&Location=San+Diego%2C+California"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = json(&body);
    assert_eq!(created["ReviewBody"], "Quiet rooms & fast wifi");
    assert_eq!(created["Location"], "San Diego, California");
}

#[tokio::test]
async fn post_with_unknown_location_is_rejected() {
    let app = create_test_app();
    let (status, _, body) = send(&app, post_form("ReviewBody=Nice&Location=Atlantis")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(&body[..], br#"{"error": "Location not allowed"}"#);
}

#[tokio::test]
async fn post_with_empty_fields_is_rejected() {
    let app = create_test_app();
    let (status, _, body) = send(&app, post_form("ReviewBody=&Location=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(&body[..], br#"{"error": "ReviewBody and Location are required"}"#);
}

#[tokio::test]
async fn post_reports_location_before_missing_body() {
    let app = create_test_app();
    let (status, _, body) = send(&app, post_form("Location=Atlantis")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Location not allowed");
}

#[tokio::test]
async fn rejected_posts_leave_store_unchanged() {
    let app = create_test_app();
    send(&app, post_form("ReviewBody=Nice&Location=Atlantis")).await;
    send(&app, post_form("")).await;

    let (_, _, body) = send(&app, get("/")).await;
    assert_eq!(ids(&body).len(), 3);
}

#[tokio::test]
async fn post_with_non_utf8_body_is_bad_request() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(vec![0x52, 0x65, 0xff, 0xfe]))
        .unwrap();
    let (status, _, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"]
        .as_str()
        .unwrap()
        .starts_with("Malformed request body"));
}

#[tokio::test]
async fn oversized_post_is_rejected() {
    let config = ServerConfig {
        max_body_size_kb: 1,
        ..ServerConfig::default()
    };
    let app = create_test_app_with(config, seeded_reviews());
    let payload = format!("ReviewBody={}&Location=Fresno%2C+California", "a".repeat(4096));
    let (status, _, body) = send(&app, post_form(&payload)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json(&body)["error"], "Payload too large: max 1KB allowed");
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = create_test_app();
    for method in ["PUT", "DELETE", "PATCH"] {
        let request = Request::builder()
            .method(method)
            .uri("/anything")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(json(&body), serde_json::json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn equal_scores_keep_store_order() {
    let reviews = vec![
        review("a", "same", "Fresno, California", "2023-01-01 00:00:01"),
        review("b", "great", "Fresno, California", "2023-01-01 00:00:02"),
        review("c", "same", "Fresno, California", "2023-01-01 00:00:03"),
        review("d", "same", "Fresno, California", "2023-01-01 00:00:04"),
    ];
    let app = create_test_app_with(ServerConfig::default(), reviews);
    let (_, _, body) = send(&app, get("/")).await;
    assert_eq!(ids(&body), vec!["b", "a", "c", "d"]);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert_eq!(headers["x-request-id"], "req-42");

    let (_, headers, _) = send(&app, get("/")).await;
    assert!(!headers["x-request-id"].is_empty());
}

#[tokio::test]
async fn slow_ranking_times_out_with_json_error() {
    let config = ServerConfig {
        timeout_secs: 1,
        ..ServerConfig::default()
    };
    let slow: Arc<dyn SentimentScorer> = Arc::new(|_: &str| {
        std::thread::sleep(Duration::from_millis(1500));
        SentimentScore::default()
    });
    let mut reviews = seeded_reviews();
    reviews.truncate(1);
    let state = ServerState::new(config, ReviewStore::from_reviews(reviews), slow);
    let app = build_router(Arc::new(state));

    let (status, headers, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    assert_eq!(&body[..], br#"{"error": "Request timed out"}"#);
}
