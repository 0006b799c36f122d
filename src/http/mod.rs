mod dto;
mod error;
mod handlers;
mod router;

pub use dto::{CalculateMortgageResponse, ErrorResponse};
pub use error::ApiError;
pub use router::{create_router, AppState, CALCULATE_MORTGAGE_PATH};

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// serve the router until ctrl-c
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
