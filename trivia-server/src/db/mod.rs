//! Database layer - connection pool, migrations, and stores
//!
//! Handlers only see the [`TriviaStore`] trait. [`PgStore`] is the
//! production implementation; [`MemoryStore`] backs tests and
//! `serve --in-memory`.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{connect, create_pool, PoolConfig};
pub use store::{DbError, DbResult, PgStore, TriviaStore};
