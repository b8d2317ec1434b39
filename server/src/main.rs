mod config;
mod error;
mod routes;

use std::sync::Arc;

use client::config::SiteConfig;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = ServerConfig::from_env()?;
    let site = Arc::new(SiteConfig::default());
    let app = routes::app(&config, site)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, compression = config.compression, "club connect listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
