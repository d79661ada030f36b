//! Connection pool for the blog's PostgreSQL store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create the connection pool shared by the post queries and the seed
/// binary.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
