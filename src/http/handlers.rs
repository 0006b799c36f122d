use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info_span};
use uuid::Uuid;

use crate::calculator::MortgagePipeline;
use crate::validation::MortgageParams;

use super::dto::CalculateMortgageResponse;
use super::{ApiError, AppState};

/// POST /api/v1/calculate-mortgage
pub async fn calculate_mortgage(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CalculateMortgageResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("calculate_mortgage", %request_id);

    span.in_scope(|| -> Result<Json<CalculateMortgageResponse>, ApiError> {
        let body = parse_body(&body)?;
        let params = MortgageParams::from_json(&body);
        let quote = state.pipeline.calculate(&params)?;

        Ok(Json(CalculateMortgageResponse::from(&quote)))
    })
}

/// fallback for unknown routes and methods
pub async fn route_not_found() -> ApiError {
    ApiError::not_found()
}

/// turn a handler panic into the generic 500 body
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");

    ApiError::internal().into_response()
}

// an empty body reads as an empty object so every field is reported missing
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|err| {
        error!(error = %err, "unreadable request body");
        ApiError::internal()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b" \n").unwrap(), json!({}));
        assert_eq!(parse_body(br#"{"propertyPrice": 1}"#).unwrap(), json!({"propertyPrice": 1}));
        assert_eq!(parse_body(b"{not json").unwrap_err(), ApiError::internal());
    }
}
