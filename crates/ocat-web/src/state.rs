use std::sync::Arc;

use ocat_client::AssessmentService;
use tera::Tera;

use crate::error::WebError;
use crate::render;

/// Shared state for the page handlers.
#[derive(Clone)]
pub struct WebState {
    pub service: AssessmentService,
    pub templates: Arc<Tera>,
}

impl WebState {
    pub fn new(service: AssessmentService) -> Result<Self, WebError> {
        Ok(Self {
            service,
            templates: Arc::new(render::templates()?),
        })
    }
}
