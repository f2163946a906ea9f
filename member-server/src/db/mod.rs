//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations (`member-server/migrations`)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service: owns the SQLite connection pool
///
/// Connections are checked out per statement and returned to the pool on drop,
/// so every request releases its connection on all exit paths.
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the pool described by `config` and apply migrations
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let in_memory = config.is_in_memory();

        let mut options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON")
            // 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // An in-memory database lives and dies with its connection
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.db_max_connections)
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            url = %config.database_url,
            in_memory,
            "Database connection established"
        );

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Round-trip a trivial statement to check the database is reachable
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = DbService::new(&Config::for_tests()).await.unwrap();
        db.ping().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM member")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_unopenable_database_is_a_database_error() {
        let mut config = Config::for_tests();
        config.database_url = "sqlite:/nonexistent-dir/nested/members.db".into();
        let err = DbService::new(&config).await.unwrap_err();
        assert_eq!(err.code, crate::utils::ErrorCode::DatabaseError);
    }
}
