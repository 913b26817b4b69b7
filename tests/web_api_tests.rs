//! Integration tests for the Fortune Palette Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fortune_palette::config::Config;
use fortune_palette::web::{create_router, AppState};

/// Sends a GET request to a fresh router and returns status and JSON body.
async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = create_router(AppState::new(Config::default()));

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Concepts and Palettes
// ============================================================================

#[tokio::test]
async fn test_list_concepts() {
    let (status, json) = get_json("/api/concepts").await;

    assert_eq!(status, StatusCode::OK);
    let concepts = json["concepts"].as_array().unwrap();
    assert_eq!(concepts.len(), 18);
    assert_eq!(concepts[0]["key"], "finance");
    assert_eq!(concepts[0]["primary"], "#1e3d59");
    assert_eq!(concepts[0]["candidates"].as_array().unwrap().len(), 4);
    assert_eq!(json["fallback"], "#2196f3");
}

#[tokio::test]
async fn test_get_concept_by_key() {
    let (status, json) = get_json("/api/concepts/Finance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "finance");
    assert_eq!(json["primary"], "#1e3d59");

    let (status, json) = get_json("/api/concepts/travel").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("travel"));
}

#[tokio::test]
async fn test_get_palette() {
    // "금융 앱" percent-encoded
    let (status, json) = get_json("/api/palette?concept=%EA%B8%88%EC%9C%B5%20%EC%95%B1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["match"]["category"], "finance");
    assert_eq!(json["primary"]["shades"][6]["hex"], "#1e3d59");
    assert_eq!(json["secondaries"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_palette_missing_concept() {
    let (status, json) = get_json("/api/palette").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("concept"));
}

// ============================================================================
// Colors
// ============================================================================

#[tokio::test]
async fn test_get_shades() {
    let (status, json) = get_json("/api/colors/2196f3/shades").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["base"], "#2196f3");
    assert_eq!(json["shades"][0]["hex"], "#f5faff");
    assert_eq!(json["shades"][3]["hex"], "#90cbf9");
    assert_eq!(json["shades"][8]["hex"], "#1769aa");
}

#[tokio::test]
async fn test_get_shades_encoded_hash() {
    let (status, json) = get_json("/api/colors/%232196F3/shades").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["base"], "#2196f3");
}

#[tokio::test]
async fn test_get_shades_invalid_color() {
    let (status, json) = get_json("/api/colors/zzzzzz/shades").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_get_harmony() {
    let (status, json) = get_json("/api/colors/ff0000/harmony").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["primary"], "#ff0000");
    assert_eq!(json["secondaries"][0]["color"], "#00ffff");
    assert_eq!(json["secondaries"][1]["color"], "#00ff00");
    assert_eq!(json["secondaries"][2]["color"], "#0000ff");
    assert_eq!(json["secondaries"][3]["color"], "#ffff00");
}

#[tokio::test]
async fn test_get_color_name() {
    let (status, json) = get_json("/api/colors/1E3D59/name").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Navy");
    assert_eq!(json["hex"], "#1e3d59");
}

// ============================================================================
// Fortune
// ============================================================================

#[tokio::test]
async fn test_get_fortune() {
    let (status, json) = get_json("/api/fortune?date=2000-01-01&time=09:30").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day_pillar"], "무오");
    assert_eq!(json["element"], "earth");
    assert_eq!(json["matches"]["best"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_fortune_invalid_date() {
    let (status, json) = get_json("/api/fortune?date=yesterday").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid birth date");
}

#[tokio::test]
async fn test_get_fortune_missing_date() {
    let (status, _) = get_json("/api/fortune").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Config
// ============================================================================

#[tokio::test]
async fn test_get_config() {
    let (status, json) = get_json("/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["web"]["port"], 3001);
}
