use sqlx::sqlite::SqlitePool;
use tracing::warn;

pub mod transaction;

const DEFAULT_DATABASE_URL: &str = "sqlite://wallet_store.db?mode=rwc";

const CREATE_TABLES_SQL: &str = include_str!("../../migrations/create_tables.sql");

/// Initialize the SQLite connection pool and create tables
pub async fn init_db() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        warn!(
            "DATABASE_URL not set in .env file, falling back to {}",
            DEFAULT_DATABASE_URL
        );
        DEFAULT_DATABASE_URL.to_string()
    });

    let pool = SqlitePool::connect(&database_url).await?;

    // Create all tables
    create_tables(&pool).await?;

    Ok(pool)
}

/// Execute the schema statements bundled from migrations/create_tables.sql.
/// Safe to run against an existing database: every statement is IF NOT EXISTS.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES_SQL.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::raw_sql(trimmed).execute(pool).await?;
        }
    }

    Ok(())
}

/// Single-connection in-memory database for tests. Pooled connections each
/// open their own `:memory:` database, so the pool is pinned to one
/// connection.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    create_tables(&pool).await.expect("Failed to create tables");

    pool
}
