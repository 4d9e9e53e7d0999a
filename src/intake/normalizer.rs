//! Turns a raw webhook payload into a [`CaseRecord`].

use rust_decimal::Decimal;

use super::court::{county_key, CourtAddress};
use super::estate::derive_estate_totals;
use super::format::{format_amount, format_currency, format_date_value, parse_amount};
use super::heirs::parse_heirs;
use super::model::{
    Administration, AdministrationType, Attorney, CaseRecord, Court, Decedent, Estate, Hearing,
    Petitioner, Publication,
};
use super::raw::RawIntake;
use super::validation::{validate, ValidationError};
use crate::config::IntakeDefaults;

/// Stateless normalizer over an injected, immutable set of defaults.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    defaults: IntakeDefaults,
}

impl Normalizer {
    pub fn new(defaults: IntakeDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &IntakeDefaults {
        &self.defaults
    }

    /// Validate the payload, then build the case record.
    ///
    /// Only missing required fields fail. Malformed money, dates and heir
    /// lines fall back to `"$0.00"`, `""` and dropped entries.
    pub fn normalize(&self, raw: &RawIntake) -> Result<CaseRecord, ValidationError> {
        validate(raw)?;

        let record = CaseRecord {
            attorney: self.attorney(raw),
            decedent: decedent(raw),
            petitioner: petitioner(raw),
            estate: estate(raw),
            heirs: parse_heirs(raw.value("heirs_list")),
            administration: administration(raw),
            court: self.court(raw),
            case_number: raw.text_or_empty("case_number"),
            hearing: hearing(raw),
            publication: Publication {
                newspaper: self.defaults.newspaper.clone(),
            },
        };

        log::debug!(
            "normalized intake: county={}, heirs={}, total={}",
            record.court.county,
            record.heirs.len(),
            record.estate.total
        );

        Ok(record)
    }

    /// Courthouse for a county name; unknown counties resolve to the fallback entry.
    pub fn resolve_court_address(&self, county: &str) -> &CourtAddress {
        self.defaults.courts.resolve(county)
    }

    fn attorney(&self, raw: &RawIntake) -> Attorney {
        let firm = &self.defaults.firm;
        let or_default = |key: &str, fallback: &String| raw.text(key).unwrap_or_else(|| fallback.clone());

        Attorney {
            name: or_default("attorney_name", &firm.attorney_name),
            bar_number: or_default("attorney_bar", &firm.bar_number),
            firm_name: or_default("firm_name", &firm.firm_name),
            street: or_default("firm_street", &firm.street),
            city: or_default("firm_city", &firm.city),
            state: or_default("firm_state", &firm.state),
            zip: or_default("firm_zip", &firm.zip),
            phone: or_default("firm_phone", &firm.phone),
            fax: or_default("firm_fax", &firm.fax),
            email: or_default("firm_email", &firm.email),
        }
    }

    fn court(&self, raw: &RawIntake) -> Court {
        let county = raw
            .text("court_county")
            .map(|county| county_key(&county))
            .unwrap_or_else(|| self.defaults.default_county.clone());
        let address = self.resolve_court_address(&county);

        Court {
            branch: raw
                .text("court_branch")
                .unwrap_or_else(|| address.branch.clone()),
            street: address.street.clone(),
            city: address.city.clone(),
            zip: address.zip.clone(),
            county,
        }
    }
}

fn decedent(raw: &RawIntake) -> Decedent {
    Decedent {
        name: raw.text_or_empty("decedent_name"),
        death_date: format_date_value(raw.value("death_date")),
        death_place: raw.text_or_empty("death_place"),
        death_address: raw.text_or_empty("death_address"),
        is_resident: raw.flag("death_resident"),
    }
}

fn petitioner(raw: &RawIntake) -> Petitioner {
    Petitioner {
        name: raw.text_or_empty("petitioner_name"),
        relationship: raw.text_or_empty("petitioner_relationship"),
        address: raw.text_or_empty("petitioner_address"),
        phone: raw.text_or_empty("petitioner_phone"),
        is_executor: raw.flag("petitioner_is_executor"),
        birth_date: format_date_value(raw.value("petitioner_birth_date")),
        drivers_license: raw.text_or_empty("petitioner_license"),
        license_state: raw.text_or_empty("petitioner_license_state"),
    }
}

fn amount(raw: &RawIntake, key: &str) -> Decimal {
    raw.text(key)
        .and_then(|text| parse_amount(&text))
        .unwrap_or(Decimal::ZERO)
}

fn estate(raw: &RawIntake) -> Estate {
    let totals = derive_estate_totals(
        amount(raw, "personal_property_value"),
        amount(raw, "real_property_gross"),
        amount(raw, "real_property_encumbrance"),
    );

    Estate {
        personal_property: format_amount(totals.personal_property),
        real_property_gross: format_amount(totals.real_property_gross),
        real_property_encumbrance: format_amount(totals.real_property_encumbrance),
        real_property_net: format_amount(totals.real_property_net),
        total: format_amount(totals.total),
        has_will: raw.flag("has_will"),
        will_date: format_date_value(raw.value("will_date")),
        codicil_date: format_date_value(raw.value("codicil_date")),
        will_self_proving: raw.flag("will_self_proving"),
    }
}

fn administration(raw: &RawIntake) -> Administration {
    Administration {
        kind: AdministrationType::from_answer(&raw.text_or_empty("admin_type")),
        bond_required: raw.flag("bond_required"),
        bond_amount: format_currency(raw.text("bond_amount").as_deref()),
    }
}

fn hearing(raw: &RawIntake) -> Hearing {
    Hearing {
        date: format_date_value(raw.value("hearing_date")),
        time: raw.text_or_empty("hearing_time"),
        department: raw.text_or_empty("hearing_dept"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RawIntake {
        RawIntake::new()
            .with("decedent_name", "Mary Major")
            .with("death_date", "2024-01-15")
            .with("death_place", "Glendale, CA")
            .with("death_address", "12 Oak Ave, Glendale, CA 91203")
            .with("death_resident", "yes")
            .with("petitioner_name", "Sam Major")
            .with("petitioner_relationship", "son")
            .with("petitioner_address", "9 Elm St, Pasadena, CA 91101")
            .with("petitioner_phone", "626-555-0100")
            .with("personal_property_value", "$12,000")
            .with("has_will", "no")
            .with("heirs_list", "Sam Major, son, 50")
            .with("admin_type", "full")
            .with("bond_required", "no")
    }

    #[test]
    fn test_firm_defaults_fill_blank_attorney_fields() {
        let record = Normalizer::default()
            .normalize(&payload().with("firm_name", "").with("firm_city", "Burbank"))
            .unwrap();
        assert_eq!(record.attorney.firm_name, "LAW OFFICES OF ROZSA GYENE");
        assert_eq!(record.attorney.city, "Burbank");
        assert_eq!(record.attorney.bar_number, "208356");
    }

    #[test]
    fn test_court_address_comes_from_table() {
        let record = Normalizer::default()
            .normalize(
                &payload()
                    .with("court_county", "orange")
                    .with("court_street", "1 Fake St"),
            )
            .unwrap();
        assert_eq!(record.court.county, "ORANGE");
        assert_eq!(record.court.street, "341 THE CITY DRIVE S");
        assert_eq!(record.court.branch, "LAMOREAUX JUSTICE CENTER");
    }

    #[test]
    fn test_branch_override_and_default_county() {
        let record = Normalizer::default()
            .normalize(&payload().with("court_branch", "PASADENA"))
            .unwrap();
        assert_eq!(record.court.county, "LOS ANGELES");
        assert_eq!(record.court.branch, "PASADENA");
        assert_eq!(record.court.zip, "90012");
    }

    #[test]
    fn test_flags_and_administration() {
        let record = Normalizer::default()
            .normalize(
                &payload()
                    .with("bond_required", "YES")
                    .with("bond_amount", "25000")
                    .with("petitioner_is_executor", "yes"),
            )
            .unwrap();
        assert!(record.decedent.is_resident);
        assert!(!record.estate.has_will);
        assert!(record.petitioner.is_executor);
        assert_eq!(record.administration.kind, AdministrationType::Full);
        assert!(record.administration.bond_required);
        assert_eq!(record.administration.bond_amount, "$25,000.00");
    }

    #[test]
    fn test_garbage_fields_default_instead_of_failing() {
        let record = Normalizer::default()
            .normalize(
                &payload()
                    .with("death_date", "sometime last year")
                    .with("personal_property_value", "unknown")
                    .with("real_property_gross", "lots")
                    .with("will_date", "n/a")
                    .with("bond_amount", "TBD")
                    .with("heirs_list", ",,,\n, brother"),
            )
            .unwrap();
        assert_eq!(record.decedent.death_date, "");
        assert_eq!(record.estate.personal_property, "$0.00");
        assert_eq!(record.estate.real_property_gross, "$0.00");
        assert_eq!(record.estate.total, "$0.00");
        assert_eq!(record.estate.will_date, "");
        assert_eq!(record.administration.bond_amount, "$0.00");
        assert!(record.heirs.is_empty());
    }

    #[test]
    fn test_injected_newspaper() {
        let defaults = IntakeDefaults {
            newspaper: "METROPOLITAN NEWS".to_string(),
            ..IntakeDefaults::default()
        };
        let record = Normalizer::new(defaults).normalize(&payload()).unwrap();
        assert_eq!(record.publication.newspaper, "METROPOLITAN NEWS");
    }
}
