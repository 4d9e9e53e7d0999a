//! Blank form templates, read once at startup.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{FormError, FormId};

#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<FormId, Vec<u8>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `<dir>/<FormId::template_file()>` for every form.
    ///
    /// Missing files are logged and skipped; the form will then fail on its
    /// own at generation time. Any other I/O error is returned.
    pub fn load_dir(dir: &Path) -> Result<Self, FormError> {
        let mut store = Self::new();

        for form in FormId::ALL {
            let path = dir.join(form.template_file());
            match fs::read(&path) {
                Ok(bytes) => {
                    log::info!("Loaded {} template ({} bytes)", form, bytes.len());
                    store.insert(form, bytes);
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::warn!("{} template not found at {}", form, path.display());
                }
                Err(source) => {
                    return Err(FormError::TemplateIo {
                        path: path.display().to_string(),
                        source,
                    });
                }
            }
        }

        Ok(store)
    }

    pub fn insert(&mut self, form: FormId, bytes: Vec<u8>) {
        self.templates.insert(form, bytes);
    }

    pub fn with(mut self, form: FormId, bytes: Vec<u8>) -> Self {
        self.insert(form, bytes);
        self
    }

    pub fn get(&self, form: FormId) -> Option<&[u8]> {
        self.templates.get(&form).map(Vec::as_slice)
    }

    /// Forms with a template, in `FormId::ALL` order.
    pub fn loaded(&self) -> Vec<FormId> {
        FormId::ALL
            .into_iter()
            .filter(|form| self.templates.contains_key(form))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
