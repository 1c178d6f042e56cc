mod api;
pub mod config;
mod error;
mod token;

pub use api::*;
pub use config::ServerConfig;
pub use error::ApiError;
pub use token::*;

use std::sync::Arc;
use tracing::info;

/// Binds the configured address and serves the token endpoint until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let issuer = TokenIssuer::new(config.credentials(), config.token_ttl)?;
    let ttl_secs = issuer.ttl_secs();
    let state = AppState {
        issuer: Arc::new(issuer),
    };

    let app = router(state);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Token service listening on http://{} (tokens valid for {}s)",
        addr, ttl_secs
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Token service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
