//! To-do Static Server
//!
//! Serves the application shell at `/`, the icon at `/favicon.ico` and
//! everything else from a static directory. There are no API endpoints.

pub mod config;
mod routes;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use config::{ServerConfig, ServerError};
pub use routes::build_router;

pub async fn serve(listener: TcpListener, config: &ServerConfig) -> Result<()> {
    let app = build_router(config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
