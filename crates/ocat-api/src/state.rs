use std::sync::Arc;

use ocat_storage::repository::AssessmentRepository;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub assessments: Arc<dyn AssessmentRepository>,
}

impl AppState {
    pub fn new(assessments: impl AssessmentRepository + 'static) -> Self {
        Self {
            assessments: Arc::new(assessments),
        }
    }
}
