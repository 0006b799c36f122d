use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info};

use crate::errors::CalculatorError;

use super::dto::ErrorResponse;

pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// API error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: ROUTE_NOT_FOUND.to_string(),
        }
    }

    /// generic 500, never carries internal detail
    pub fn internal() -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::Validation(e) => {
                debug!(reason = %e, "mortgage request rejected");
                ApiError::bad_request(e.to_string())
            }
            // existing clients expect the insurance floor as a 500 with its message
            CalculatorError::InsufficientDownPayment => {
                info!(reason = %err, "down payment below insurable minimum");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
            CalculatorError::CalculationError { .. } => {
                error!(error = %err, "error calculating mortgage");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
