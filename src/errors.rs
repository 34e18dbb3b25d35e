use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error depicting errors that occur while loading and validating the configuration
///
#[derive(Debug, Error)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
#[error("LoggingError: {0}")]
pub struct LoggingError(pub String);

/// Errors from calls to the upstream weather and air pollution APIs
///
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("UpstreamError::Network: {0}")]
    Network(String),
    #[error("UpstreamError::Timeout: {0}")]
    Timeout(String),
    #[error("UpstreamError::Status: {0}")]
    Status(StatusCode),
    #[error("UpstreamError::Schema: {0}")]
    Schema(String),
}
impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout(e.to_string())
        } else if e.is_decode() {
            UpstreamError::Schema(e.to_string())
        } else {
            UpstreamError::Network(e.to_string())
        }
    }
}
impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self { UpstreamError::Schema(e.to_string()) }
}

/// Errors related to the model artifacts and the prediction step
///
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not ready")]
    NotReady,
    #[error("model already loaded")]
    AlreadyLoaded,
    #[error("feature-shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("ModelError::InvalidArtifact: {0}")]
    InvalidArtifact(String),
    #[error("ModelError::Io: {0}")]
    Io(String),
    #[error("ModelError::Document: {0}")]
    Document(String),
}
impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> Self { ModelError::Io(e.to_string()) }
}
impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self { ModelError::Document(e.to_string()) }
}

/// Errors returned from the http handlers, each mapped to a distinguishable status code
///
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("feature-shape mismatch: {0}")]
    BadFeatures(String),
    #[error("bad request: {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Only a body that is valid json but doesn't fit the feature vector is a shape mismatch,
/// syntax, content type and body size problems keep the status axum gives them
impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        match e {
            JsonRejection::JsonDataError(e) => ApiError::BadFeatures(e.body_text()),
            other => ApiError::Rejected { status: other.status(), message: other.body_text() },
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(UpstreamError::Status(StatusCode::NOT_FOUND)) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Model(ModelError::NotReady) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Model(ModelError::ShapeMismatch { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadFeatures(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
