//! Required-field validation for intake payloads.
//!
//! Every missing field is collected before reporting, so the submitter sees
//! the whole list at once instead of fixing one field per round trip.

use std::fmt;

use super::raw::RawIntake;

/// Required payload keys with the labels used in error messages.
pub const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("decedent_name", "Decedent name"),
    ("death_date", "Date of death"),
    ("death_place", "Place of death"),
    ("death_address", "Decedent's address at death"),
    ("death_resident", "County residency"),
    ("petitioner_name", "Petitioner name"),
    ("petitioner_relationship", "Petitioner relationship"),
    ("petitioner_address", "Petitioner address"),
    ("petitioner_phone", "Petitioner phone"),
    ("personal_property_value", "Personal property value"),
    ("has_will", "Will answer"),
    ("heirs_list", "Heirs list"),
    ("admin_type", "Administration type"),
    ("bond_required", "Bond answer"),
];

/// Keys that only need to be present; an empty value is a legitimate answer.
const PRESENCE_ONLY: &[&str] = &["heirs_list"];

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required", label))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// One or more required fields are missing from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Keys of every missing field, in required-field order.
    pub fn missing_fields(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.field.clone()).collect()
    }

    /// Numbered, multi-line description for API responses.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} required field(s) missing",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    /// `Ok` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing required fields: {}",
            self.missing_fields().join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Validation functions
// ============================================================================

/// Record an error when `key` is absent, null or an empty string.
pub fn validate_required(raw: &RawIntake, key: &str, label: &str, errors: &mut ValidationError) {
    if raw.is_blank(key) {
        errors.add(FieldError::missing(key, label));
    }
}

/// Record an error only when `key` is absent or null.
pub fn validate_present(raw: &RawIntake, key: &str, label: &str, errors: &mut ValidationError) {
    if raw.is_absent(key) {
        errors.add(FieldError::missing(key, label));
    }
}

/// Check the full required-field set and report every gap together.
pub fn validate(raw: &RawIntake) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    for (key, label) in REQUIRED_FIELDS {
        if PRESENCE_ONLY.contains(key) {
            validate_present(raw, key, label, &mut errors);
        } else {
            validate_required(raw, key, label, &mut errors);
        }
    }

    errors.into_result()
}
