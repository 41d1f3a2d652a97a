//! Storage layer for the Freezo inventory backend.
//!
//! Owns the SQLite connection pool, the embedded schema migrations, the
//! default-data seed, and the repositories that run every SQL statement.

use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DbConfig;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on a locked database before SQLite reports
/// `SQLITE_BUSY`.
pub const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Name of the category seeded into an empty `categories` table.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Failure while preparing the database at startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("Failed to seed default data: {0}")]
    Seed(#[from] sqlx::Error),
}

/// Create a connection pool over the database file named in `config`.
///
/// The file is created if missing. Connections run in WAL mode with a
/// bounded busy wait so concurrent writers queue instead of failing
/// immediately.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(config.enforce_foreign_keys);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Schema and journal state, as reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    /// Highest successfully applied migration, `None` before bootstrap.
    pub schema_version: Option<i64>,
    /// Current `PRAGMA journal_mode`, `wal` for pools from [`create_pool`].
    pub journal_mode: String,
}

/// Read the applied schema version and journal mode.
pub async fn storage_status(pool: &DbPool) -> Result<StorageStatus, sqlx::Error> {
    let journal_mode = sqlx::query_scalar::<_, String>("PRAGMA journal_mode")
        .fetch_one(pool)
        .await?;

    let migrations_table = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_optional(pool)
    .await?;

    let schema_version = match migrations_table {
        Some(_) => {
            sqlx::query_scalar::<_, Option<i64>>(
                "SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1",
            )
            .fetch_one(pool)
            .await?
        }
        None => None,
    };

    Ok(StorageStatus {
        schema_version,
        journal_mode,
    })
}

/// Apply the embedded schema migrations. Never destructive.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Insert [`DEFAULT_CATEGORY`] if, and only if, no category exists yet.
///
/// The emptiness check and the insert are a single statement. Returns
/// `true` when a row was inserted.
pub async fn seed_defaults(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO categories (name) \
         SELECT ? WHERE NOT EXISTS (SELECT 1 FROM categories)",
    )
    .bind(DEFAULT_CATEGORY)
    .execute(pool)
    .await?;

    let seeded = result.rows_affected() > 0;
    if seeded {
        tracing::info!(category = DEFAULT_CATEGORY, "Seeded default category");
    }
    Ok(seeded)
}

/// Run migrations followed by the default-data seed.
pub async fn bootstrap(pool: &DbPool) -> Result<(), BootstrapError> {
    run_migrations(pool).await?;
    tracing::debug!("Database migrations applied");
    seed_defaults(pool).await?;
    Ok(())
}
