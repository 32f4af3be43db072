use crate::adapters::http::{router, AppState};
use crate::config::Settings;
use crate::core::{ActivityRegistry, InMemoryRegistry};
use crate::utils::error::{ActivityError, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the registry from the configured seed and serves until Ctrl-C.
pub async fn run(settings: Settings) -> Result<()> {
    let registry = InMemoryRegistry::from_seed(settings.activities.clone())?;
    tracing::info!("Registry initialized with {} activities", registry.len());

    let listener = TcpListener::bind(settings.bind_addr())
        .await
        .map_err(|e| ActivityError::ServerError {
            message: format!("failed to bind {}: {}", settings.bind_addr(), e),
        })?;

    serve(listener, Arc::new(registry), &settings.static_dir, shutdown_signal()).await
}

/// Serves the API on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    registry: Arc<dyn ActivityRegistry>,
    static_dir: &str,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    let app = router(AppState::new(registry), static_dir);

    tracing::info!("🚀 Listening on http://{}", addr);
    tracing::info!("  GET    /activities");
    tracing::info!("  POST   /activities/{{name}}/signup?email=...");
    tracing::info!("  DELETE /activities/{{name}}/unregister?email=...");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ActivityError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
