//! REST error types and HTTP conversions

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diaglab_engine::ScenarioError;
use serde_json::json;
use thiserror::Error;

/// REST API error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl From<ScenarioError> for RestError {
    fn from(err: ScenarioError) -> Self {
        if err.is_client_error() {
            RestError::BadRequest(err.to_string())
        } else {
            RestError::InternalError(err.to_string())
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err: RestError =
            ScenarioError::invalid_parameter("volume_kb", "must be >= 0, got -1").into();
        assert!(matches!(err, RestError::BadRequest(_)));
        assert!(err.to_string().contains("volume_kb"));
    }

    #[test]
    fn test_worker_errors_map_to_internal() {
        let err: RestError = ScenarioError::WorkerPanicked("diag-worker-1".to_string()).into();
        assert!(matches!(err, RestError::InternalError(_)));
    }
}
