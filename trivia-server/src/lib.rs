//! trivia-server: HTTP API for trivia questions
//!
//! Serves categories and questions from PostgreSQL with pagination,
//! search, category filtering, question creation/deletion, and
//! random next-question selection for quiz play.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
