use std::collections::BTreeMap;

use super::mappings::mapping;
use super::FormId;
use crate::intake::CaseRecord;

/// Resolved values for one form: text by field name, and the checkbox set.
///
/// Checkboxes are always present with an explicit state so a filler can clear
/// boxes that a template ships pre-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    text: BTreeMap<String, String>,
    checks: BTreeMap<String, bool>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the declarative mapping of `form` against `record`.
    pub fn for_form(form: FormId, record: &CaseRecord, signed_on: &str) -> Self {
        let table = mapping(form);
        let mut values = Self::new();

        for binding in table.text {
            values.set_text(binding.target, binding.source.resolve(record, signed_on));
        }
        for binding in table.checks {
            values.set_check(binding.target, binding.when.holds(record));
        }

        values
    }

    pub fn set_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.text.insert(field.into(), value.into());
    }

    pub fn set_check(&mut self, field: impl Into<String>, checked: bool) {
        self.checks.insert(field.into(), checked);
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.text.get(field).map(String::as_str)
    }

    pub fn check(&self, field: &str) -> Option<bool> {
        self.checks.get(field).copied()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.text.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn checks(&self) -> impl Iterator<Item = (&str, bool)> {
        self.checks.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of text fields plus checkboxes.
    pub fn len(&self) -> usize {
        self.text.len() + self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{Normalizer, RawIntake};

    fn record(has_will: &str, executor: &str) -> CaseRecord {
        let raw = RawIntake::new()
            .with("decedent_name", "Mary Major")
            .with("death_date", "2024-01-15")
            .with("death_place", "Glendale")
            .with("death_address", "12 Oak Ave")
            .with("death_resident", "yes")
            .with("petitioner_name", "Sam Major")
            .with("petitioner_relationship", "son")
            .with("petitioner_address", "9 Elm St")
            .with("petitioner_phone", "626-555-0100")
            .with("petitioner_is_executor", executor)
            .with("personal_property_value", "50000")
            .with("has_will", has_will)
            .with("will_date", "2019-06-01")
            .with("heirs_list", "Sam Major, son, 50")
            .with("admin_type", "limited")
            .with("bond_required", "no")
            .with("bond_amount", "10000");
        Normalizer::default().normalize(&raw).unwrap()
    }

    const PROBATE_WILL: &str = "topmostSubform[0].Page1[0].CheckBox1[0]";
    const LETTERS_OF_ADMIN: &str = "topmostSubform[0].Page1[0].CheckBox1[2]";
    const EXECUTOR: &str = "topmostSubform[0].Page1[0].CheckBox3[1]";
    const WILL_ANNEXED: &str = "topmostSubform[0].Page1[0].CheckBox3[2]";

    #[test]
    fn test_de111_will_with_named_executor() {
        let values = FieldValues::for_form(FormId::De111, &record("yes", "yes"), "10/19/2026");
        assert_eq!(values.check(PROBATE_WILL), Some(true));
        assert_eq!(values.check(EXECUTOR), Some(true));
        assert_eq!(values.check(WILL_ANNEXED), Some(false));
        assert_eq!(values.check(LETTERS_OF_ADMIN), Some(false));
        assert_eq!(
            values.text("topmostSubform[0].Page2[0].TextField9[0]"),
            Some("06/01/2019")
        );
    }

    #[test]
    fn test_de111_intestate_requests_letters_of_administration() {
        let values = FieldValues::for_form(FormId::De111, &record("no", "yes"), "10/19/2026");
        assert_eq!(values.check(LETTERS_OF_ADMIN), Some(true));
        assert_eq!(values.check(PROBATE_WILL), Some(false));
        assert_eq!(values.check(EXECUTOR), Some(false));
        // will date is suppressed without a will
        assert_eq!(values.text("topmostSubform[0].Page2[0].TextField9[0]"), Some(""));
    }

    #[test]
    fn test_text_values_resolve_from_record() {
        let values = FieldValues::for_form(FormId::De111, &record("yes", "no"), "10/19/2026");
        assert_eq!(
            values.text("topmostSubform[0].Page1[0].TextField1[0]"),
            Some("ROZSA GYENE, ESQ., SBN 208356")
        );
        assert_eq!(
            values.text("topmostSubform[0].Page1[0].TextField1[10]"),
            Some("PETITIONER, Sam Major")
        );
        assert_eq!(
            values.text("topmostSubform[0].Page1[0].TextField2[3]"),
            Some("LOS ANGELES CA 90012")
        );
        assert_eq!(
            values.text("topmostSubform[0].Page2[0].TextField8[4]"),
            Some("$50,000.00")
        );
        // no bond, so the amount stays blank
        assert_eq!(values.text("topmostSubform[0].Page1[0].TextField6[0]"), Some(""));
        assert_eq!(
            values.text("topmostSubform[0].Page4[0].DateField1[0]"),
            Some("10/19/2026")
        );
    }

    #[test]
    fn test_every_target_resolved_once() {
        let case = record("yes", "yes");
        for form in FormId::ALL {
            let table = mapping(form);
            let values = FieldValues::for_form(form, &case, "10/19/2026");
            assert_eq!(values.len(), table.text.len() + table.checks.len(), "{}", form);
        }
    }
}
