use std::sync::Arc;

use mortgage_calculator::http::{self, create_router, AppState};
use mortgage_calculator::{telemetry, MortgageCalculator, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    telemetry::init(config.log_format);

    let state = Arc::new(AppState::new(Arc::new(MortgageCalculator::new())));
    let router = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("server listening at http://{}", listener.local_addr()?);

    http::serve(listener, router).await?;

    info!("server stopped");
    Ok(())
}
