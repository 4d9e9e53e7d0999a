use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::forms::{FormError, FormId, GeneratedForms};
use crate::intake::{CaseRecord, ValidationError};
use crate::ErrorResponse;

/// 400 body for a payload that is missing required fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub missing_fields: Vec<String>,
    pub timestamp: String,
}

impl From<&ValidationError> for ValidationErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: "ValidationError".to_string(),
            message: err.to_message(),
            missing_fields: err.missing_fields(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Either 400 body `POST /api/forms` can answer with.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BadRequestBody {
    Validation(ValidationErrorResponse),
    Request(ErrorResponse),
}

impl From<&ValidationError> for BadRequestBody {
    fn from(err: &ValidationError) -> Self {
        Self::Validation(ValidationErrorResponse::from(err))
    }
}

impl From<FormError> for BadRequestBody {
    fn from(err: FormError) -> Self {
        Self::Request(ErrorResponse::bad_request(&err.to_string()))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormsQuery {
    /// Comma-separated form codes, e.g. `DE-111,DE-150`. All forms when omitted.
    pub forms: Option<String>,
}

impl FormsQuery {
    /// Requested forms in the order given, duplicates removed. A filter that
    /// names no form at all selects every form.
    pub fn selected_forms(&self) -> Result<Vec<FormId>, FormError> {
        let Some(list) = self.forms.as_deref().filter(|list| !list.trim().is_empty()) else {
            return Ok(FormId::ALL.to_vec());
        };

        let mut selected = Vec::new();
        for code in list.split(',').filter(|code| !code.trim().is_empty()) {
            let form: FormId = code.parse()?;
            if !selected.contains(&form) {
                selected.push(form);
            }
        }
        if selected.is_empty() {
            return Ok(FormId::ALL.to_vec());
        }
        Ok(selected)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormsMetadata {
    pub decedent: String,
    pub petitioner: String,
    #[schema(example = "$50,000.00")]
    pub estate_value: String,
    pub forms_generated: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormsResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: Uuid,
    pub timestamp: String,
    pub metadata: FormsMetadata,
    /// Base64 PDF bytes keyed by form code.
    pub pdfs: BTreeMap<String, String>,
    /// Failure reason keyed by form code.
    pub failures: BTreeMap<String, String>,
}

impl FormsResponse {
    pub fn new(submission_id: Uuid, record: &CaseRecord, generated: GeneratedForms) -> Self {
        let requested = generated.documents.len() + generated.failures.len();
        let pdfs: BTreeMap<String, String> = generated
            .documents
            .iter()
            .map(|doc| (doc.form.to_string(), BASE64.encode(&doc.pdf)))
            .collect();
        let failures: BTreeMap<String, String> = generated
            .failures
            .iter()
            .map(|(form, err)| (form.to_string(), err.to_string()))
            .collect();

        Self {
            success: true,
            message: format!(
                "Generated {} of {} forms for the estate of {}",
                pdfs.len(),
                requested,
                record.decedent.name
            ),
            submission_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            metadata: FormsMetadata {
                decedent: record.decedent.name.clone(),
                petitioner: record.petitioner.name.clone(),
                estate_value: record.estate.total.clone(),
                forms_generated: pdfs.len(),
            },
            pdfs,
            failures,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub app: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            app: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
