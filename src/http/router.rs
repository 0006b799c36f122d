use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::calculator::{MortgageCalculator, MortgagePipeline};

pub const CALCULATE_MORTGAGE_PATH: &str = "/api/v1/calculate-mortgage";

/// application state shared across handlers
pub struct AppState {
    pub pipeline: Arc<dyn MortgagePipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<dyn MortgagePipeline>) -> Self {
        AppState { pipeline }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Arc::new(MortgageCalculator::new()))
    }
}

/// create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            CALCULATE_MORTGAGE_PATH,
            post(handlers::calculate_mortgage).fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
