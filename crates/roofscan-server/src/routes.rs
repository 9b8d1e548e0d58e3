//! Router assembly and request handlers.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use roofscan_climate::{PowerClient, RainfallMonth, SolarMonth, YieldCalculator, YieldConfig};
use roofscan_geo::{
    meters_per_pixel, to_real_area, StaticMapClient, DEFAULT_ZOOM, SQUARE_FEET_PER_SQUARE_METER,
};
use roofscan_vision::{extract_roof_contour, PixelPoint, RoofDetection};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::geocode::{GeocodeClient, GeocodedAddress};

/// Shared application state: upstream clients plus the yield calculator.
///
/// Clients for keyed providers are `None` when the key is not configured;
/// their endpoints answer with a configuration error per request.
#[derive(Debug, Clone)]
pub struct AppState {
    power: PowerClient,
    staticmap: Option<StaticMapClient>,
    geocode: Option<GeocodeClient>,
    yields: YieldCalculator,
}

impl AppState {
    /// Build the state and its clients from the startup configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            power: PowerClient::with_base_url(&config.power_base),
            staticmap: config.static_map_key.as_deref().map(StaticMapClient::new),
            geocode: config.geocoding_key.as_deref().map(GeocodeClient::new),
            yields: YieldCalculator::new(YieldConfig {
                runoff_coeff: config.runoff_coeff,
                ..YieldConfig::default()
            }),
        }
    }
}

/// Build the application router with all routes and middleware attached.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/geocode", get(geocode_address))
        .route("/api/satellite", get(satellite_tile))
        .route("/api/area", get(roof_area))
        .route("/api/climate", get(climate_yield))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the roofscan API" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
struct GeocodeParams {
    address: String,
}

async fn geocode_address(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<GeocodedAddress>, ApiError> {
    let client = state.geocode.as_ref().ok_or(ApiError::GeocodingKeyMissing)?;
    let address = client.geocode(&params.address).await?;

    info!(address = %address.formatted_address, "geocoded");
    Ok(Json(address))
}

#[derive(Debug, Deserialize)]
struct TileParams {
    lat: f64,
    lon: f64,
    #[serde(default = "default_zoom")]
    zoom: u8,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

async fn satellite_tile(
    State(state): State<AppState>,
    Query(params): Query<TileParams>,
) -> Result<impl IntoResponse, ApiError> {
    let client = state
        .staticmap
        .as_ref()
        .ok_or(ApiError::StaticMapKeyMissing)?;
    let bytes = client
        .fetch_tile(params.lat, params.lon, params.zoom)
        .await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}

/// Roof measurement for the tile centered on a coordinate.
#[derive(Debug, Serialize)]
struct AreaResponse {
    area_px: f64,
    area_m2: f64,
    area_ft2: f64,
    contour: Vec<PixelPoint>,
    meters_per_pixel: f64,
}

async fn roof_area(
    State(state): State<AppState>,
    Query(params): Query<TileParams>,
) -> Result<Json<AreaResponse>, ApiError> {
    let client = state
        .staticmap
        .as_ref()
        .ok_or(ApiError::StaticMapKeyMissing)?;
    let bytes = client
        .fetch_tile(params.lat, params.lon, params.zoom)
        .await?;

    // Contour extraction is CPU-bound; keep it off the async workers.
    let detection = tokio::task::spawn_blocking(move || extract_roof_contour(&bytes))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))??;

    let (area_px, contour) = match detection {
        RoofDetection::Detected(roof) => (roof.area_px, roof.polygon),
        RoofDetection::NotDetected => (0.0, Vec::new()),
    };

    let scale = meters_per_pixel(params.lat, params.zoom);
    let area = to_real_area(area_px, scale);

    info!(
        lat = params.lat,
        lon = params.lon,
        zoom = params.zoom,
        area_m2 = area.m2,
        "measured roof"
    );

    Ok(Json(AreaResponse {
        area_px,
        area_m2: area.m2,
        area_ft2: area.ft2,
        contour,
        meters_per_pixel: scale,
    }))
}

#[derive(Debug, Deserialize)]
struct ClimateParams {
    lat: f64,
    lon: f64,
    area_m2: f64,
}

/// Coordinate echo in yield reports.
#[derive(Debug, Serialize)]
struct Location {
    lat: f64,
    lon: f64,
}

/// Twelve-month yield report for a roof at a location.
#[derive(Debug, Serialize)]
struct ClimateResponse {
    solar: Vec<SolarMonth>,
    rainfall: Vec<RainfallMonth>,
    location: Location,
    roof_area_m2: f64,
    roof_area_ft2: f64,
}

async fn climate_yield(
    State(state): State<AppState>,
    Query(params): Query<ClimateParams>,
) -> Result<Json<ClimateResponse>, ApiError> {
    let record = state.power.fetch_climatology(params.lat, params.lon).await?;

    let solar = state.yields.monthly_solar_energy(&record, params.area_m2);
    let rainfall = state.yields.monthly_rainfall_harvest(&record, params.area_m2);

    info!(
        lat = params.lat,
        lon = params.lon,
        area_m2 = params.area_m2,
        annual_kwh = solar[0].annual_total_kwh,
        "yield report built"
    );

    Ok(Json(ClimateResponse {
        solar,
        rainfall,
        location: Location {
            lat: params.lat,
            lon: params.lon,
        },
        roof_area_m2: params.area_m2,
        roof_area_ft2: params.area_m2 * SQUARE_FEET_PER_SQUARE_METER,
    }))
}
