use async_trait::async_trait;
use jiff::Timestamp;
use sqlx::FromRow;
use sqlx::sqlite::SqlitePool;

use ocat_core::models::assessment::{Assessment, NewAssessment};
use ocat_core::models::risk::RiskLevel;

use crate::error::StorageError;
use crate::repository::AssessmentRepository;

/// A row of the `assessments` table.
#[derive(Debug, FromRow)]
struct AssessmentRow {
    id: i64,
    cat_name: String,
    cat_date_of_birth: String,
    instrument_type: i64,
    score: i64,
    risk_level: String,
    created_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<AssessmentRow> for Assessment {
    type Error = StorageError;

    fn try_from(row: AssessmentRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = move |reason: String| StorageError::InvalidRow { id, reason };

        Ok(Assessment {
            id: row.id,
            cat_date_of_birth: row
                .cat_date_of_birth
                .parse::<jiff::civil::Date>()
                .map_err(|e| invalid(format!("cat_date_of_birth: {e}")))?,
            instrument_type: i32::try_from(row.instrument_type)
                .map_err(|e| invalid(format!("instrument_type: {e}")))?,
            score: u8::try_from(row.score).map_err(|e| invalid(format!("score: {e}")))?,
            risk_level: row
                .risk_level
                .parse::<RiskLevel>()
                .map_err(|e| invalid(format!("risk_level: {e}")))?,
            created_at: Timestamp::from_microsecond(row.created_at)?,
            deleted_at: row
                .deleted_at
                .map(Timestamp::from_microsecond)
                .transpose()?,
            cat_name: row.cat_name,
        })
    }
}

const SELECT_LIVE: &str = "SELECT id, cat_name, cat_date_of_birth, instrument_type, score, \
     risk_level, created_at, deleted_at \
     FROM assessments \
     WHERE deleted_at IS NULL \
     ORDER BY created_at DESC, id DESC";

/// SQLite-backed [`AssessmentRepository`].
#[derive(Clone)]
pub struct SqliteAssessmentRepository {
    pool: SqlitePool,
}

impl SqliteAssessmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Current time truncated to the microsecond precision stored in the table,
/// so a returned record compares equal to the same record read back later.
fn now_micros() -> Result<Timestamp, StorageError> {
    Ok(Timestamp::from_microsecond(
        Timestamp::now().as_microsecond(),
    )?)
}

#[async_trait]
impl AssessmentRepository for SqliteAssessmentRepository {
    async fn create(&self, new: NewAssessment) -> Result<Assessment, StorageError> {
        new.validate()?;
        let created_at = now_micros()?;

        let result = sqlx::query(
            "INSERT INTO assessments \
             (cat_name, cat_date_of_birth, instrument_type, score, risk_level, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.cat_name)
        .bind(new.cat_date_of_birth.to_string())
        .bind(i64::from(new.instrument_type))
        .bind(i64::from(new.score))
        .bind(new.risk_level.as_str())
        .bind(created_at.as_microsecond())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(id, score = new.score, risk_level = %new.risk_level, "assessment created");

        Ok(Assessment {
            id,
            cat_name: new.cat_name,
            cat_date_of_birth: new.cat_date_of_birth,
            instrument_type: new.instrument_type,
            score: new.score,
            risk_level: new.risk_level,
            created_at,
            deleted_at: None,
        })
    }

    async fn find_all(&self) -> Result<Vec<Assessment>, StorageError> {
        let rows = sqlx::query_as::<_, AssessmentRow>(SELECT_LIVE)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Assessment::try_from).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let deleted_at = now_micros()?;

        let result = sqlx::query(
            "UPDATE assessments SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(deleted_at.as_microsecond())
        .bind(id)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "assessment soft-deleted");
        } else {
            tracing::debug!(id, "no live assessment to delete");
        }
        Ok(deleted)
    }
}
