//! Database schema command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations, seed, DEFAULT_MAX_CONNECTIONS};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Load the reference categories and questions into empty tables
    #[arg(long)]
    pub seed: bool,
}

/// Create tables and optionally seed them
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if args.seed {
        seed::run(&pool)
            .await
            .context("Failed to seed reference dataset")?;
    }

    pool.close().await;
    Ok(())
}
