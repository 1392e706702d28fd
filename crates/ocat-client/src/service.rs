use reqwest::Response;
use serde::Deserialize;
use tracing::instrument;

use ocat_core::models::assessment::{Assessment, NewAssessment};

use crate::error::ClientError;

const USER_AGENT: &str = concat!("ocat-client/", env!("CARGO_PKG_VERSION"));

/// Client for the assessment endpoints of the service.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct DeleteResponse {
    deleted: bool,
}

impl AssessmentService {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// All live assessments, newest first.
    #[instrument(skip(self))]
    pub async fn get_list(&self) -> Result<Vec<Assessment>, ClientError> {
        let response = self.client.get(self.url("/assessments")).send().await?;
        let assessments: Vec<Assessment> = check(response).await?.json().await?;
        tracing::debug!(count = assessments.len(), "fetched assessments");
        Ok(assessments)
    }

    /// Store a new assessment and return the persisted record.
    #[instrument(skip(self, new), fields(cat_name = %new.cat_name, score = new.score))]
    pub async fn submit(&self, new: &NewAssessment) -> Result<Assessment, ClientError> {
        let response = self
            .client
            .post(self.url("/assessments"))
            .json(new)
            .send()
            .await?;
        let assessment: Assessment = check(response).await?.json().await?;
        tracing::info!(id = assessment.id, "assessment submitted");
        Ok(assessment)
    }

    /// Soft-delete an assessment. `false` when the id matched no live record.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<bool, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/assessments/{id}")))
            .send()
            .await?;
        let body: DeleteResponse = check(response).await?.json().await?;
        Ok(body.deleted)
    }
}

/// Turn a non-success response into [`ClientError::Api`], preferring the
/// service's `{"error": ...}` message, then the raw body, then the status
/// reason. The message is empty when none of those exist, so callers can
/// choose their own fallback.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .map(|body| body.error)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();

    tracing::warn!(status = status.as_u16(), %message, "service returned an error");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
