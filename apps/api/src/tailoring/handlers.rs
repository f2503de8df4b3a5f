//! Axum route handler for the tailoring API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::generator::{tailor_resume, TailorRequest};

const MISSING_FIELDS: &str = "Missing required fields: job_description, company, role";
const MISSING_API_KEY: &str = "Language model API key is not configured";

/// Raw multipart fields, before required-field validation.
#[derive(Debug, Default)]
struct TailorForm {
    job_description: Option<String>,
    company: Option<String>,
    role: Option<String>,
}

impl TailorForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = TailorForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let slot = match field.name() {
                Some("job_description") => &mut form.job_description,
                Some("company") => &mut form.company,
                Some("role") => &mut form.role,
                _ => continue,
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid multipart field: {e}")))?;
            *slot = Some(value);
        }
        Ok(form)
    }

    /// All three fields present and non-blank, or a validation error naming them.
    fn validate(self) -> Result<TailorRequest, AppError> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        match (
            present(self.job_description),
            present(self.company),
            present(self.role),
        ) {
            (Some(job_description), Some(company), Some(role)) => Ok(TailorRequest {
                job_description,
                company,
                role,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// POST /api/v1/resumes/tailor
///
/// Multipart fields `job_description`, `company`, `role`. Responds with the tailored
/// resume as a PDF attachment.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let request_id = Uuid::new_v4();
    let request = TailorForm::from_multipart(multipart).await?.validate()?;

    let Some(completion) = state.completion.as_deref() else {
        warn!("Tailor request {request_id} rejected: no API key configured");
        return Err(AppError::Configuration(MISSING_API_KEY.to_string()));
    };

    info!("Tailor request {request_id} accepted");
    let resume = tailor_resume(completion, &state.base_resume, &state.page_config, &request).await?;
    info!("Tailor request {request_id} complete");

    let disposition = format!("attachment; filename=\"{}\"", resume.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(resume.pdf),
    )
        .into_response())
}
