//! PostgreSQL connection pool
//!
//! The pool is the only shared state between requests; its size comes
//! from the `--max-connections` flag of `trivia serve` / `trivia migrate`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool of at most `max_connections` connections (at least one).
///
/// Fails if the URL is malformed or the first connection can't be made.
///
/// ```ignore
/// let pool = create_pool("postgres://localhost:5432/trivia", DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections.max(1);
    tracing::debug!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_an_error() {
        let result = create_pool("not a database url", 1).await;
        assert!(result.is_err());
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored
    #[tokio::test]
    #[ignore = "requires database"]
    async fn single_connection_pool_answers() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 0).await.expect("pool creation failed");

        let (one,): (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(one, 1);
        assert_eq!(pool.options().get_max_connections(), 1);
    }
}
