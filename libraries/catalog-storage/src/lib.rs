//! Play Catalog Storage
//!
//! `SQLite` persistence for catalog items.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `items` module owns its queries and row mapping
//! - **Repository**: `SqliteItemRepository` implements `catalog_core::ItemRepository`
//!   on top of a shared pool, created once per process
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_storage::{create_pool, run_migrations, SqliteItemRepository};
//! use catalog_core::ItemRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://catalog.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let items = SqliteItemRepository::new(pool);
//! let all = items.get_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod repository;

// Vertical slices
pub mod items;

pub use error::StorageError;
pub use repository::SqliteItemRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// In-memory databases are private to a connection, so they are always
/// opened with a single connection regardless of `max_connections`.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://catalog.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30));
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let max_connections = if in_memory { 1 } else { max_connections };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}

/// Open a pool and bring its schema up to date
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    let pool = create_pool(database_url, max_connections).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
