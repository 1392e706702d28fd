use thiserror::Error;

use ocat_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("validation failed: {0}")]
    Validation(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid row {id}: {reason}")]
    InvalidRow { id: i64, reason: String },

    #[error("timestamp error: {0}")]
    Timestamp(#[from] jiff::Error),
}
