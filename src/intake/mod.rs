//! Intake module - normalization of probate questionnaire payloads.
//!
//! - `raw` - the loosely-typed webhook payload
//! - `validation` - required-field checks that report every gap at once
//! - `format` - currency and date formatting
//! - `heirs` - heir list parsing
//! - `court` - county courthouse lookup
//! - `estate` - derived estate totals
//! - `normalizer` - assembles the [`CaseRecord`]

pub mod court;
pub mod estate;
pub mod format;
pub mod heirs;
pub mod model;
pub mod normalizer;
pub mod raw;
pub mod validation;

pub use court::{CourtAddress, CourtDirectory};
pub use estate::{derive_estate_totals, EstateTotals};
pub use format::{format_currency, format_date, parse_amount};
pub use heirs::parse_heirs;
pub use model::{
    Administration, AdministrationType, Attorney, CaseRecord, Court, Decedent, Estate, Hearing,
    Heir, Petitioner, Publication,
};
pub use normalizer::Normalizer;
pub use raw::RawIntake;
pub use validation::{validate, FieldError, ValidationError, REQUIRED_FIELDS};
