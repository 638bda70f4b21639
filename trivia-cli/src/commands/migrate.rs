//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Insert the default categories if none exist
    #[arg(long)]
    pub seed: bool,
}

/// Create tables and optionally seed categories, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Failed to run migrations")?;

    if args.seed {
        let inserted = migrations::seed_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        println!("Seeded {} categories", inserted);
    }

    println!("Migrations complete");
    pool.close().await;
    Ok(())
}
