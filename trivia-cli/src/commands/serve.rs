//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{connect, migrations, MemoryStore, PgStore, PoolConfig, TriviaStore};
use trivia_server::http::{run_server, ServerConfig};
use trivia_server::models::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Questions per page
    #[arg(
        long,
        env = "TRIVIA_PAGE_SIZE",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64)
    )]
    pub page_size: u32,

    /// Maximum database connections [default: 5]
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Insert the default categories if none exist
    #[arg(long)]
    pub seed: bool,

    /// Serve from a throwaway in-memory store with the default categories
    /// (takes precedence over --database-url)
    #[arg(long, conflicts_with_all = ["seed", "skip_migrations"])]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        if args.database_url.is_some() || args.max_connections.is_some() {
            tracing::warn!("--in-memory set; ignoring database URL and pool settings");
        }
        Arc::new(MemoryStore::seeded())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let max_connections = args
            .max_connections
            .unwrap_or(PoolConfig::DEFAULT_MAX_CONNECTIONS);
        let pool_config = PoolConfig::default().with_max_connections(max_connections);
        let pool = connect(&database_url, pool_config)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool).await.context("Failed to run migrations")?;
        }
        if args.seed {
            migrations::seed_categories(&pool)
                .await
                .context("Failed to seed categories")?;
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        page_size: args.page_size,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
