//! Error types for rendering, startup and the HTTP surface.
//!
//! Storage errors never reach this layer: queries swallow them and render
//! empty sections. What remains is classified by where it stops:
//! - RenderError: one leaf fails, its siblings still render
//! - StartupError: the process refuses to start
//! - ApiError: a single request fails with an HTTP status

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::classifier::ClassifierError;

/// Failure of a single leaf during a render pass.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Risk classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database not found: {0}")]
    DatabaseNotFound(std::path::PathBuf),

    #[error("Failed to load risk model: {0}")]
    Model(#[from] ClassifierError),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("Request failed: {}", self);
        (status, self.to_string()).into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("render task failed: {err}"))
    }
}
