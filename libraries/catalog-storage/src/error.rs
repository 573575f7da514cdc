/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A stored value could not be read back into its domain type
    #[error("Invalid {column} in item {id}: {reason}")]
    InvalidColumn {
        id: String,
        column: &'static str,
        reason: String,
    },

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create an invalid column error
    pub fn invalid_column(
        id: impl Into<String>,
        column: &'static str,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidColumn {
            id: id.into(),
            column,
            reason: reason.to_string(),
        }
    }
}

impl From<StorageError> for catalog_core::CatalogError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(e) => e.into(),
            other => catalog_core::CatalogError::storage(other.to_string()),
        }
    }
}
