//! Web API module for Fortune Palette.
//!
//! This module provides a JSON API over the color engine and the day pillar
//! fortune, for a web front-end or other HTTP clients.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/concepts` - List concept categories with their colors
//! - `GET /api/concepts/{key}` - One concept category
//! - `GET /api/palette?concept=` - Full palette for a concept
//! - `GET /api/colors/{hex}/shades` - Ten-level shade ramp
//! - `GET /api/colors/{hex}/harmony` - Four harmonic secondary colors
//! - `GET /api/colors/{hex}/name` - Nearest color name
//! - `GET /api/fortune?date=&time=` - Day pillar reading
//! - `GET /api/config` - Current configuration
//!
//! Hex colors in paths are given without `#` (or with `#` percent-encoded).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::color::{build_palette, color_name, shade_ramp, ConceptPalette, PaletteResult};
use crate::config::Config;
use crate::fortune::{parse_birth_date, parse_birth_time, FortuneReading};
use crate::models::{ConceptCategory, Harmony, PaletteColor, RgbColor, FALLBACK_COLOR};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// One concept category.
#[derive(Debug, Serialize)]
pub struct ConceptInfo {
    /// Category key matched against concept text.
    pub key: ConceptCategory,
    /// Canonical primary color.
    pub primary: String,
    /// All four candidate colors, primary first.
    pub candidates: Vec<String>,
    /// Synonym keywords.
    pub synonyms: &'static [&'static str],
}

/// Concept category list response.
#[derive(Debug, Serialize)]
pub struct ConceptListResponse {
    /// Categories in scan order.
    pub concepts: Vec<ConceptInfo>,
    /// Color used when nothing matches.
    pub fallback: String,
}

/// Query parameters for the palette endpoint.
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Free-text service concept.
    pub concept: Option<String>,
}

/// One harmonic secondary color.
#[derive(Debug, Serialize)]
pub struct HarmonyItem {
    /// Relationship to the primary.
    pub harmony: Harmony,
    /// Display label such as "보조1".
    pub label: &'static str,
    /// What the relationship conveys.
    pub description: &'static str,
    /// Resulting color.
    pub color: String,
}

/// Harmony response.
#[derive(Debug, Serialize)]
pub struct HarmonyResponse {
    /// The primary color.
    pub primary: String,
    /// Complementary, triadic A, triadic B and analogous.
    pub secondaries: Vec<HarmonyItem>,
}

impl From<&PaletteResult> for HarmonyResponse {
    fn from(result: &PaletteResult) -> Self {
        Self {
            primary: result.primary.to_hex(),
            secondaries: result
                .secondaries
                .iter()
                .map(|s| HarmonyItem {
                    harmony: s.harmony,
                    label: s.harmony.display_name(),
                    description: s.harmony.description(),
                    color: s.color.to_hex(),
                })
                .collect(),
        }
    }
}

/// Color name response.
#[derive(Debug, Serialize)]
pub struct ColorNameResponse {
    /// The color as lowercase hex.
    pub hex: String,
    /// Nearest reference color name.
    pub name: &'static str,
}

/// Query parameters for the fortune endpoint.
#[derive(Debug, Deserialize)]
pub struct FortuneQuery {
    /// Birth date (YYYY-MM-DD).
    pub date: Option<String>,
    /// Birth time (HH:MM).
    pub time: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(error: ApiError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(error))
}

// ============================================================================
// Input Validation
// ============================================================================

/// Parses a hex color taken from a URL path.
fn parse_hex_param(hex: &str) -> Result<RgbColor, ApiError> {
    RgbColor::from_hex(hex)
        .map_err(|e| ApiError::with_details(format!("Invalid color: {hex}"), e.to_string()))
}

/// Requires a non-blank query parameter.
fn required_param<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::new(format!("Missing query parameter: {name}"))),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

impl From<ConceptCategory> for ConceptInfo {
    fn from(category: ConceptCategory) -> Self {
        Self {
            key: category,
            primary: category.primary().to_hex(),
            candidates: category.candidates().iter().map(RgbColor::to_hex).collect(),
            synonyms: category.synonyms(),
        }
    }
}

/// GET /api/concepts - List concept categories.
async fn list_concepts() -> Json<ConceptListResponse> {
    let concepts = ConceptCategory::ALL.into_iter().map(ConceptInfo::from).collect();

    Json(ConceptListResponse {
        concepts,
        fallback: FALLBACK_COLOR.to_hex(),
    })
}

/// GET /api/concepts/{key} - One concept category.
async fn get_concept(Path(key): Path<String>) -> ApiResult<ConceptInfo> {
    ConceptCategory::from_key(&key)
        .map(|category| Json(ConceptInfo::from(category)))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(format!("Unknown concept category: {key}"))),
            )
        })
}

/// GET /api/palette?concept= - Full palette for a concept.
async fn get_palette(Query(query): Query<PaletteQuery>) -> ApiResult<ConceptPalette> {
    let concept = required_param(query.concept.as_deref(), "concept").map_err(bad_request)?;
    Ok(Json(build_palette(concept)))
}

/// GET /api/colors/{hex}/shades - Shade ramp of a color.
async fn get_shades(Path(hex): Path<String>) -> ApiResult<PaletteColor> {
    let color = parse_hex_param(&hex).map_err(bad_request)?;
    Ok(Json(shade_ramp(color)))
}

/// GET /api/colors/{hex}/harmony - Secondary colors of a color.
async fn get_harmony(Path(hex): Path<String>) -> ApiResult<HarmonyResponse> {
    let color = parse_hex_param(&hex).map_err(bad_request)?;
    Ok(Json(HarmonyResponse::from(&PaletteResult::from_primary(color))))
}

/// GET /api/colors/{hex}/name - Nearest color name.
async fn get_color_name(Path(hex): Path<String>) -> ApiResult<ColorNameResponse> {
    let color = parse_hex_param(&hex).map_err(bad_request)?;
    Ok(Json(ColorNameResponse {
        hex: color.to_hex(),
        name: color_name(color),
    }))
}

/// GET /api/fortune?date=&time= - Day pillar reading.
async fn get_fortune(Query(query): Query<FortuneQuery>) -> ApiResult<FortuneReading> {
    let date = required_param(query.date.as_deref(), "date").map_err(bad_request)?;
    let birth_date = parse_birth_date(date).map_err(|e| {
        bad_request(ApiError::with_details("Invalid birth date", format!("{e:#}")))
    })?;

    let birth_time = match query.time.as_deref().map(str::trim) {
        Some(time) if !time.is_empty() => Some(parse_birth_time(time).map_err(|e| {
            bad_request(ApiError::with_details("Invalid birth time", format!("{e:#}")))
        })?),
        _ => None,
    };

    Ok(Json(FortuneReading::for_birth(birth_date, birth_time)))
}

/// GET /api/config - Current configuration.
async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.config().clone())
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Read-only API meant to be called from a locally served front-end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/concepts", get(list_concepts))
        .route("/api/concepts/{key}", get(get_concept))
        .route("/api/palette", get(get_palette))
        .route("/api/colors/{hex}/shades", get(get_shades))
        .route("/api/colors/{hex}/harmony", get(get_harmony))
        .route("/api/colors/{hex}/name", get(get_color_name))
        .route("/api/fortune", get(get_fortune))
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves the configured host and port to a socket address.
///
/// Host names such as `localhost` are looked up; the first result wins.
///
/// # Errors
///
/// Returns an error if the lookup fails or yields no address.
pub async fn resolve_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let address = config.web_address();
    let resolved = tokio::net::lookup_host(address.as_str())
        .await
        .with_context(|| format!("Invalid listen address: {address}"))?
        .next()
        .with_context(|| format!("No address found for {address}"));
    resolved
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting Fortune Palette web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_param() {
        assert_eq!(
            parse_hex_param("2196f3").unwrap(),
            RgbColor::new(0x21, 0x96, 0xF3)
        );
        assert!(parse_hex_param("#2196F3").is_ok());

        let err = parse_hex_param("zzz").unwrap_err();
        assert!(err.error.contains("zzz"));
        assert!(err.details.is_some());
    }

    #[test]
    fn test_required_param() {
        assert_eq!(required_param(Some(" 금융 "), "concept").unwrap(), "금융");
        assert!(required_param(Some("   "), "concept").is_err());
        assert!(required_param(None, "concept").is_err());
    }

    #[tokio::test]
    async fn test_resolve_address() {
        let mut config = Config::new();
        config.web.port = 8080;
        let addr = resolve_address(&config).await.unwrap();
        assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());

        config.web.host = "localhost".to_string();
        let addr = resolve_address(&config).await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_harmony_response_from_result() {
        let result = PaletteResult::from_primary(RgbColor::new(255, 0, 0));
        let response = HarmonyResponse::from(&result);
        assert_eq!(response.primary, "#ff0000");
        assert_eq!(response.secondaries[0].color, "#00ffff");
        assert_eq!(response.secondaries[0].label, "보조1");
    }
}
