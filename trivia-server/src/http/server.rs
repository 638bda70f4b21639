//! Axum server setup
//!
//! Server skeleton with:
//! - API routes nested under `/api/v1`
//! - Open CORS for the API
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::db::TriviaStore;
use crate::models::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Base path for every API route
pub const API_BASE: &str = "/api/v1";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Questions per page (default: 10, max 100)
    pub page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            page_size: DEFAULT_PER_PAGE,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub page_size: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, page_size: u32) -> Self {
        Self {
            store,
            page_size: page_size.clamp(1, MAX_PER_PAGE),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let api = Router::new()
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::quizzes::router())
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .merge(routes::health::router())
        .nest(API_BASE, api)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn not_found() -> ApiError {
    ApiError::not_found("route", "unmatched")
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(PgStore::new(create_pool(&database_url).await?));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn TriviaStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store, config.page_size));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        page_size = config.page_size,
        "Server listening on {}{}",
        config.bind_addr,
        API_BASE
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn page_size_is_clamped() {
        let store: Arc<dyn TriviaStore> = Arc::new(crate::db::MemoryStore::new());
        assert_eq!(AppState::new(store.clone(), 0).page_size, 1);
        assert_eq!(AppState::new(store, 1000).page_size, 100);
    }
}
