//! Error-to-status mapping for the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use bsim_core::BsimError;
use bsim_runner::RunError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Run(#[from] RunError),

    #[error("run {0:?} not found")]
    RunNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<BsimError> for ApiError {
    fn from(e: BsimError) -> Self {
        ApiError::Run(RunError::Config(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Bad geometry/rates and unknown policies are the caller's
            // fault; everything was rejected before simulation started.
            ApiError::Run(RunError::Config(_)) => StatusCode::BAD_REQUEST,
            ApiError::Run(RunError::Timeout(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Run(RunError::Metrics(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RunNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
