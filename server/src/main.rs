use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    config.validate()?;
    info!("serving {} (shell: {})", config.static_dir.display(), config.index_path().display());

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    todo_server::serve(listener, &config).await
}
