//! Seam between form generation and the PDF library.

use super::{FieldValues, FormError, FormId};

/// Fills a blank form template with resolved field values.
pub trait FormFiller {
    /// Return the filled PDF bytes. Field names absent from the template are
    /// ignored.
    fn fill(&self, form: FormId, template: &[u8], values: &FieldValues) -> Result<Vec<u8>, FormError>;
}
