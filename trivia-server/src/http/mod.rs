//! HTTP server layer
//!
//! Axum server with:
//! - JSON success/error envelopes
//! - Open CORS under the API base
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, API_BASE};
