use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum::http::StatusCode;
use log::{info, log, Level};
use serde::Serialize;
use crate::errors::ApiError;
use crate::manager_owm::OpenWeather;
use crate::models::forecast::{ForecastBundle, PredictionFeatures};
use crate::predictor::{ModelSlot, Prediction};

/// Shared, read-only state handed to every request handler
pub struct AppState {
    pub owm: OpenWeather,
    pub model: ModelSlot,
}

pub type SharedState = Arc<AppState>;

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction: Prediction,
}

#[derive(Serialize)]
pub struct RiskResponse {
    pub city: String,
    pub prediction_features: PredictionFeatures,
    pub prediction: Prediction,
}

/// Builds the router with all routes
///
/// # Arguments
///
/// * 'state' - the state shared by all handlers
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/forecast/{city}", get(forecast))
        .route("/predict", post(predict))
        .route("/risk/{city}", get(risk))
        .with_state(state)
}

async fn forecast(
    State(state): State<SharedState>,
    Path(city): Path<String>,
) -> Result<Json<ForecastBundle>, ApiError> {
    let bundle = state.owm.forecast(&city).await.map_err(|e| log_error(&city, e.into()))?;
    info!("forecast for {}: {} entries", bundle.city, bundle.forecast.len());

    Ok(Json(bundle))
}

async fn predict(
    State(state): State<SharedState>,
    payload: Result<Json<PredictionFeatures>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(features) = payload.map_err(|e| log_error("predict", e.into()))?;
    let prediction = state.model.predict(&features).map_err(|e| log_error("predict", e.into()))?;
    info!("prediction for {:?}: {}", features, prediction);

    Ok(Json(PredictionResponse { prediction }))
}

async fn risk(
    State(state): State<SharedState>,
    Path(city): Path<String>,
) -> Result<Json<RiskResponse>, ApiError> {
    let bundle = state.owm.forecast(&city).await.map_err(|e| log_error(&city, e.into()))?;
    let prediction = state.model
        .predict(&bundle.prediction_features)
        .map_err(|e| log_error(&city, e.into()))?;
    info!("fire risk for {}: {}", bundle.city, prediction);

    Ok(Json(RiskResponse {
        city: bundle.city,
        prediction_features: bundle.prediction_features,
        prediction,
    }))
}

/// Logs a failed request, client errors at warn level and server side errors at error level
///
/// # Arguments
///
/// * 'context' - what the request was about, e.g. the city
/// * 'e' - the error to log and pass on
fn log_error(context: &str, e: ApiError) -> ApiError {
    let status = e.status_code();
    log!(log_level(status), "{} -> {}: {}", context, status, e);
    e
}

fn log_level(status: StatusCode) -> Level {
    if status.is_server_error() { Level::Error } else { Level::Warn }
}
