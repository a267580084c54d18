//! trivia CLI - runs and maintains the trivia quiz API
//!
//! - `serve`: HTTP API backed by PostgreSQL (or memory with `--in-memory`)
//! - `migrate`: create the schema, optionally loading the reference dataset

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "REST API for a trivia quiz: questions, categories, search, and quiz rounds"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables (and optionally seed them)
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment wins either way
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["trivia", "serve", "--in-memory"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.in_memory);
                assert_eq!(args.bind.port(), 5000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn max_connections_reaches_both_commands() {
        let cli = Cli::try_parse_from([
            "trivia",
            "migrate",
            "--database-url",
            "postgres://localhost/trivia",
            "--max-connections",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Migrate(args) => assert_eq!(args.max_connections, 2),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["trivia", "serve", "--max-connections", "12"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.max_connections, 12),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
