//! Forms module - filling California probate court PDF forms from a [`CaseRecord`].
//!
//! - `mappings` - declarative field tables, one per form
//! - `fields` - resolved `(field name -> value)` and checkbox sets
//! - `engine` - AcroForm filler backed by lopdf
//! - `templates` - blank form templates loaded at startup
//! - `generator` - fills every requested form and collects per-form failures
//!
//! [`CaseRecord`]: crate::intake::CaseRecord

pub mod common;
pub mod engine;
pub mod fields;
pub mod generator;
pub mod mappings;
pub mod templates;
pub mod traits;

pub use engine::AcroFormEngine;
pub use fields::FieldValues;
pub use generator::FormGenerator;
pub use templates::TemplateStore;
pub use traits::FormFiller;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Judicial Council probate forms produced for a petition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum FormId {
    #[serde(rename = "DE-111")]
    De111,
    #[serde(rename = "DE-120")]
    De120,
    #[serde(rename = "DE-140")]
    De140,
    #[serde(rename = "DE-147")]
    De147,
    #[serde(rename = "DE-147S")]
    De147S,
    #[serde(rename = "DE-150")]
    De150,
}

impl FormId {
    pub const ALL: [FormId; 6] = [
        FormId::De111,
        FormId::De120,
        FormId::De140,
        FormId::De147,
        FormId::De147S,
        FormId::De150,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::De111 => "DE-111",
            FormId::De120 => "DE-120",
            FormId::De140 => "DE-140",
            FormId::De147 => "DE-147",
            FormId::De147S => "DE-147S",
            FormId::De150 => "DE-150",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormId::De111 => "Petition for Probate",
            FormId::De120 => "Notice of Hearing",
            FormId::De140 => "Order for Probate",
            FormId::De147 => "Duties and Liabilities of Personal Representative",
            FormId::De147S => "Confidential Supplement to Duties and Liabilities",
            FormId::De150 => "Letters",
        }
    }

    /// File name of the blank template inside the template directory.
    pub fn template_file(&self) -> String {
        format!("{}-blank.pdf", self.as_str())
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FormId::ALL
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownForm(wanted.to_string()))
    }
}

/// Errors that can occur while producing a filled form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no template loaded for {0}")]
    TemplateMissing(FormId),
    #[error("failed to read template {path}: {source}")]
    TemplateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("unknown form '{0}'")]
    UnknownForm(String),
}

/// A successfully filled form.
#[derive(Debug, Clone)]
pub struct FilledForm {
    pub form: FormId,
    pub filename: String,
    pub pdf: Vec<u8>,
}

/// Outcome of filling a batch of forms. Each form succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct GeneratedForms {
    pub documents: Vec<FilledForm>,
    pub failures: Vec<(FormId, FormError)>,
}

impl GeneratedForms {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn forms(&self) -> Vec<FormId> {
        self.documents.iter().map(|doc| doc.form).collect()
    }
}
