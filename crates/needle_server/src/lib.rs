//! HTTP shim over [`NeedleEngine`]: one loaded artifact, any origin, no auth.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use needle_constant::app::CHAR_MATRIX_ROUTE;
use needle_core::NeedleEngine;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::{Result, ServerError};

/// Router with all routes, permissive CORS and request tracing.
pub fn router(engine: Arc<NeedleEngine>) -> Router {
    Router::new()
        .route(CHAR_MATRIX_ROUTE, get(routes::get_char_matrix))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Load the configured artifact and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let engine = NeedleEngine::load(&config.artifact_path)?;
    serve_engine(Arc::new(engine), &config.bind_address()).await
}

/// Serve an already loaded engine on `addr` until Ctrl-C.
pub async fn serve_engine(engine: Arc<NeedleEngine>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!(
        addr = %listener.local_addr()?,
        font = %engine.font_name(),
        size = engine.size(),
        "needle server listening"
    );

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("needle server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
