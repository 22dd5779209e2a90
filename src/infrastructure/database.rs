// src/infrastructure/database.rs
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Open the connection pool.
///
/// # Errors
///
/// Fails when the database cannot be reached.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply pending migrations from `./migrations`.
///
/// # Errors
///
/// Fails when a migration cannot be applied.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
