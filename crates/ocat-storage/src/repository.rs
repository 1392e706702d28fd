use async_trait::async_trait;

use ocat_core::models::assessment::{Assessment, NewAssessment};

use crate::error::StorageError;

/// The only query shapes the service exposes over stored assessments.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persist a new assessment and return it with its generated id and
    /// creation timestamp.
    async fn create(&self, new: NewAssessment) -> Result<Assessment, StorageError>;

    /// All live assessments, newest first. Ties on `created_at` are broken
    /// by descending id.
    async fn find_all(&self) -> Result<Vec<Assessment>, StorageError>;

    /// Soft-delete the live assessment with `id`. Returns `false` when no
    /// live row matched.
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;
}
