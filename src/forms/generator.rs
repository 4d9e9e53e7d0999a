use std::sync::Arc;

use chrono::NaiveDate;

use super::common::{form_filename, format_signing_date};
use super::{
    AcroFormEngine, FieldValues, FilledForm, FormError, FormFiller, FormId, GeneratedForms,
    TemplateStore,
};
use crate::intake::CaseRecord;

/// Fills forms for a case. Templates are shared read-only across requests.
#[derive(Clone)]
pub struct FormGenerator {
    templates: TemplateStore,
    filler: Arc<dyn FormFiller + Send + Sync>,
}

impl FormGenerator {
    pub fn new(templates: TemplateStore, filler: Arc<dyn FormFiller + Send + Sync>) -> Self {
        Self { templates, filler }
    }

    pub fn with_acroform_engine(templates: TemplateStore) -> Self {
        Self::new(templates, Arc::new(AcroFormEngine::new()))
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Fill a single form.
    pub fn generate(
        &self,
        form: FormId,
        record: &CaseRecord,
        signed_on: NaiveDate,
    ) -> Result<FilledForm, FormError> {
        let template = self
            .templates
            .get(form)
            .ok_or(FormError::TemplateMissing(form))?;
        let values = FieldValues::for_form(form, record, &format_signing_date(signed_on));
        let pdf = self.filler.fill(form, template, &values)?;

        Ok(FilledForm {
            form,
            filename: form_filename(form, &record.decedent.name),
            pdf,
        })
    }

    /// Fill every form in `FormId::ALL` order.
    pub fn generate_all(&self, record: &CaseRecord, signed_on: NaiveDate) -> GeneratedForms {
        self.generate_selected(&FormId::ALL, record, signed_on)
    }

    /// Fill the given forms. A failure on one form never stops the others.
    pub fn generate_selected(
        &self,
        forms: &[FormId],
        record: &CaseRecord,
        signed_on: NaiveDate,
    ) -> GeneratedForms {
        let mut result = GeneratedForms::default();

        for &form in forms {
            log::info!("Generating {} ({})", form, form.title());
            match self.generate(form, record, signed_on) {
                Ok(document) => {
                    log::info!("{} generated: {} ({} bytes)", form, document.filename, document.pdf.len());
                    result.documents.push(document);
                }
                Err(err) => {
                    log::error!("{} failed: {}", form, err);
                    result.failures.push((form, err));
                }
            }
        }

        result
    }
}
