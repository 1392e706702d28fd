use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StorageError;

/// Table layout. `AUTOINCREMENT` keeps ids from being reused after a row is
/// removed. Timestamps are Unix microseconds.
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS assessments (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  cat_name TEXT NOT NULL CHECK (length(trim(cat_name)) > 0),
  cat_date_of_birth TEXT NOT NULL,
  instrument_type INTEGER NOT NULL,
  score INTEGER NOT NULL CHECK (score BETWEEN 0 AND 5),
  risk_level TEXT NOT NULL CHECK (risk_level IN ('low', 'medium', 'high')),
  created_at INTEGER NOT NULL,
  deleted_at INTEGER
);

CREATE INDEX IF NOT EXISTS idx_assessments_live_created
  ON assessments(deleted_at, created_at DESC, id DESC);
";

/// Open (creating if needed) the database at `database_url` and make sure
/// the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    init_schema(&pool).await?;
    tracing::info!(database_url, "assessment database ready");
    Ok(pool)
}

/// A private in-memory database. Held on a single connection that is never
/// recycled, since each SQLite memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
