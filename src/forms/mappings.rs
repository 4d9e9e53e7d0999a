//! Declarative field tables.
//!
//! Each form is a list of `(AcroForm field name, source)` bindings plus a list
//! of `(checkbox name, condition)` bindings. Adding a field means adding a row,
//! not writing filling code.

use super::FormId;
use crate::intake::{AdministrationType, CaseRecord, Heir};

/// Where a text field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// `"NAME, SBN 123456"`
    AttorneyLine,
    /// Name, firm, address, phone and email on separate lines.
    AttorneyBlock,
    AttorneyBar,
    FirmName,
    FirmStreet,
    FirmCity,
    FirmState,
    FirmZip,
    FirmPhone,
    FirmFax,
    FirmEmail,
    /// `"PETITIONER, <name>"`
    AttorneyFor,
    CourtCounty,
    CourtStreet,
    CourtMailing,
    /// `"<CITY> CA <ZIP>"`
    CourtCityZip,
    CourtBranch,
    CaseNumber,
    Newspaper,
    DecedentName,
    DeathDate,
    DeathPlace,
    DeathAddress,
    PetitionerName,
    PetitionerAddress,
    PetitionerPhone,
    PetitionerBirthDate,
    PetitionerLicense,
    PetitionerLicenseState,
    /// Empty when no bond is required.
    BondAmount,
    PersonalProperty,
    RealPropertyGross,
    RealPropertyEncumbrance,
    RealPropertyNet,
    EstateTotal,
    /// Empty when there is no will.
    WillDate,
    /// Empty when there is no will.
    CodicilDate,
    HeirsTable,
    HearingDate,
    HearingTime,
    HearingDepartment,
    SigningDate,
    /// `"<CITY>, CALIFORNIA"`
    ExecutionPlace,
}

/// When a checkbox is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    HasWill,
    NoWill,
    HasCodicil,
    NamedExecutor,
    AdministratorWithWill,
    FullAuthority,
    LimitedAuthority,
    BondWaived,
    BondRequired,
    Resident,
    NonResident,
    SelfProvingWill,
}

#[derive(Debug, Clone, Copy)]
pub struct TextBinding {
    pub target: &'static str,
    pub source: TextSource,
}

#[derive(Debug, Clone, Copy)]
pub struct CheckBinding {
    pub target: &'static str,
    pub when: Condition,
}

#[derive(Debug)]
pub struct FormMapping {
    pub form: FormId,
    pub text: &'static [TextBinding],
    pub checks: &'static [CheckBinding],
}

impl FormMapping {
    /// Every field name the mapping writes, text fields first.
    pub fn targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.text
            .iter()
            .map(|binding| binding.target)
            .chain(self.checks.iter().map(|binding| binding.target))
    }
}

const fn text(target: &'static str, source: TextSource) -> TextBinding {
    TextBinding { target, source }
}

const fn check(target: &'static str, when: Condition) -> CheckBinding {
    CheckBinding { target, when }
}

// ===== DE-111 Petition for Probate =====

const DE111_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::AttorneyLine),
    text("topmostSubform[0].Page1[0].TextField1[1]", TextSource::AttorneyBar),
    text("topmostSubform[0].Page1[0].TextField1[2]", TextSource::FirmName),
    text("topmostSubform[0].Page1[0].TextField1[3]", TextSource::FirmStreet),
    text("topmostSubform[0].Page1[0].TextField1[4]", TextSource::FirmCity),
    text("topmostSubform[0].Page1[0].TextField1[5]", TextSource::FirmState),
    text("topmostSubform[0].Page1[0].TextField1[6]", TextSource::FirmZip),
    text("topmostSubform[0].Page1[0].TextField1[7]", TextSource::FirmPhone),
    text("topmostSubform[0].Page1[0].TextField1[8]", TextSource::FirmFax),
    text("topmostSubform[0].Page1[0].TextField1[9]", TextSource::FirmEmail),
    text("topmostSubform[0].Page1[0].TextField1[10]", TextSource::AttorneyFor),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::CourtCounty),
    text("topmostSubform[0].Page1[0].TextField2[1]", TextSource::CourtStreet),
    text("topmostSubform[0].Page1[0].TextField2[2]", TextSource::CourtMailing),
    text("topmostSubform[0].Page1[0].TextField2[3]", TextSource::CourtCityZip),
    text("topmostSubform[0].Page1[0].TextField2[4]", TextSource::CourtBranch),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField3[1]", TextSource::CaseNumber),
    text("topmostSubform[0].Page1[0].TextField4[0]", TextSource::Newspaper),
    text("topmostSubform[0].Page1[0].TextField5[0]", TextSource::PetitionerName),
    text("topmostSubform[0].Page1[0].TextField6[0]", TextSource::BondAmount),
    text("topmostSubform[0].Page1[0].TextField7[0]", TextSource::DeathDate),
    text("topmostSubform[0].Page1[0].TextField7[1]", TextSource::DeathPlace),
    text("topmostSubform[0].Page1[0].TextField7[2]", TextSource::DeathAddress),
    text("topmostSubform[0].Page2[0].TextField8[0]", TextSource::PersonalProperty),
    text("topmostSubform[0].Page2[0].TextField8[1]", TextSource::RealPropertyGross),
    text("topmostSubform[0].Page2[0].TextField8[2]", TextSource::RealPropertyEncumbrance),
    text("topmostSubform[0].Page2[0].TextField8[3]", TextSource::RealPropertyNet),
    text("topmostSubform[0].Page2[0].TextField8[4]", TextSource::EstateTotal),
    text("topmostSubform[0].Page2[0].TextField9[0]", TextSource::WillDate),
    text("topmostSubform[0].Page2[0].TextField9[1]", TextSource::CodicilDate),
    text("topmostSubform[0].Page4[0].Table1[0]", TextSource::HeirsTable),
    text("topmostSubform[0].Page4[0].DateField1[0]", TextSource::SigningDate),
    text("topmostSubform[0].Page4[0].DateField1[1]", TextSource::SigningDate),
];

const DE111_CHECKS: &[CheckBinding] = &[
    // item 1: what is petitioned for
    check("topmostSubform[0].Page1[0].CheckBox1[0]", Condition::HasWill),
    check("topmostSubform[0].Page1[0].CheckBox1[1]", Condition::HasCodicil),
    check("topmostSubform[0].Page1[0].CheckBox1[2]", Condition::NoWill),
    check("topmostSubform[0].Page1[0].CheckBox1[4]", Condition::FullAuthority),
    check("topmostSubform[0].Page1[0].CheckBox1[5]", Condition::LimitedAuthority),
    check("topmostSubform[0].Page1[0].CheckBox2[1]", Condition::Always),
    // item 1 continued: appointment
    check("topmostSubform[0].Page1[0].CheckBox3[0]", Condition::HasWill),
    check("topmostSubform[0].Page1[0].CheckBox3[1]", Condition::NamedExecutor),
    check("topmostSubform[0].Page1[0].CheckBox3[2]", Condition::AdministratorWithWill),
    check("topmostSubform[0].Page1[0].CheckBox3[3]", Condition::NoWill),
    check("topmostSubform[0].Page1[0].CheckBox3[5]", Condition::FullAuthority),
    check("topmostSubform[0].Page1[0].CheckBox3[6]", Condition::LimitedAuthority),
    check("topmostSubform[0].Page1[0].CheckBox3[7]", Condition::BondWaived),
    check("topmostSubform[0].Page1[0].CheckBox3[8]", Condition::BondRequired),
    // item 3: residence
    check("topmostSubform[0].Page1[0].CheckBox4[0]", Condition::Resident),
    check("topmostSubform[0].Page1[0].CheckBox4[1]", Condition::NonResident),
    check("topmostSubform[0].Page2[0].CheckBox5[0]", Condition::SelfProvingWill),
];

// ===== DE-120 Notice of Hearing =====

const DE120_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::AttorneyBlock),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::CourtCounty),
    text("topmostSubform[0].Page1[0].TextField2[1]", TextSource::CourtStreet),
    text("topmostSubform[0].Page1[0].TextField2[2]", TextSource::CourtCityZip),
    text("topmostSubform[0].Page1[0].TextField2[3]", TextSource::CourtBranch),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField3[1]", TextSource::CaseNumber),
    text("topmostSubform[0].Page1[0].TextField4[0]", TextSource::PetitionerName),
    text("topmostSubform[0].Page1[0].TextField5[0]", TextSource::HearingDate),
    text("topmostSubform[0].Page1[0].TextField5[1]", TextSource::HearingTime),
    text("topmostSubform[0].Page1[0].TextField5[2]", TextSource::HearingDepartment),
];

const DE120_CHECKS: &[CheckBinding] = &[
    // hearing is at the court address shown above
    check("topmostSubform[0].Page1[0].CheckBox1[0]", Condition::Always),
];

// ===== DE-140 Order for Probate =====

const DE140_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::AttorneyBlock),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::CaseNumber),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField4[0]", TextSource::HearingDate),
    text("topmostSubform[0].Page1[0].TextField4[1]", TextSource::HearingTime),
    text("topmostSubform[0].Page1[0].TextField4[2]", TextSource::HearingDepartment),
    text("topmostSubform[0].Page1[0].TextField5[0]", TextSource::PetitionerName),
    text("topmostSubform[0].Page1[0].TextField6[0]", TextSource::BondAmount),
];

const DE140_CHECKS: &[CheckBinding] = &[
    check("topmostSubform[0].Page1[0].CheckBox1[0]", Condition::NamedExecutor),
    check("topmostSubform[0].Page1[0].CheckBox1[1]", Condition::AdministratorWithWill),
    check("topmostSubform[0].Page1[0].CheckBox1[2]", Condition::NoWill),
    check("topmostSubform[0].Page1[0].CheckBox2[0]", Condition::FullAuthority),
    check("topmostSubform[0].Page1[0].CheckBox2[1]", Condition::LimitedAuthority),
    check("topmostSubform[0].Page1[0].CheckBox3[0]", Condition::BondWaived),
    check("topmostSubform[0].Page1[0].CheckBox3[1]", Condition::BondRequired),
];

// ===== DE-147 Duties and Liabilities =====

const DE147_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::AttorneyBlock),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::CaseNumber),
    text("topmostSubform[0].Page2[0].TextField4[0]", TextSource::PetitionerAddress),
    text("topmostSubform[0].Page2[0].TextField4[1]", TextSource::PetitionerPhone),
    text("topmostSubform[0].Page2[0].DateField1[0]", TextSource::SigningDate),
    text("topmostSubform[0].Page2[0].TextField5[0]", TextSource::PetitionerName),
];

// ===== DE-147S Confidential Supplement =====

const DE147S_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::PetitionerName),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::PetitionerBirthDate),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::PetitionerLicense),
    text("topmostSubform[0].Page1[0].TextField3[1]", TextSource::PetitionerLicenseState),
    text("topmostSubform[0].Page1[0].TextField4[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField4[1]", TextSource::CaseNumber),
];

// ===== DE-150 Letters =====

const DE150_TEXT: &[TextBinding] = &[
    text("topmostSubform[0].Page1[0].TextField1[0]", TextSource::AttorneyBlock),
    text("topmostSubform[0].Page1[0].TextField2[0]", TextSource::DecedentName),
    text("topmostSubform[0].Page1[0].TextField3[0]", TextSource::CaseNumber),
    text("topmostSubform[0].Page1[0].TextField4[0]", TextSource::PetitionerName),
    text("topmostSubform[0].Page1[0].DateField1[0]", TextSource::SigningDate),
    text("topmostSubform[0].Page1[0].TextField5[0]", TextSource::ExecutionPlace),
];

const DE150_CHECKS: &[CheckBinding] = &[
    check("topmostSubform[0].Page1[0].CheckBox1[0]", Condition::FullAuthority),
    check("topmostSubform[0].Page1[0].CheckBox1[1]", Condition::LimitedAuthority),
];

static MAPPINGS: [FormMapping; 6] = [
    FormMapping { form: FormId::De111, text: DE111_TEXT, checks: DE111_CHECKS },
    FormMapping { form: FormId::De120, text: DE120_TEXT, checks: DE120_CHECKS },
    FormMapping { form: FormId::De140, text: DE140_TEXT, checks: DE140_CHECKS },
    FormMapping { form: FormId::De147, text: DE147_TEXT, checks: &[] },
    FormMapping { form: FormId::De147S, text: DE147S_TEXT, checks: &[] },
    FormMapping { form: FormId::De150, text: DE150_TEXT, checks: DE150_CHECKS },
];

/// The field table for a form.
pub fn mapping(form: FormId) -> &'static FormMapping {
    match form {
        FormId::De111 => &MAPPINGS[0],
        FormId::De120 => &MAPPINGS[1],
        FormId::De140 => &MAPPINGS[2],
        FormId::De147 => &MAPPINGS[3],
        FormId::De147S => &MAPPINGS[4],
        FormId::De150 => &MAPPINGS[5],
    }
}

impl TextSource {
    /// Render the value for this source. `signed_on` is the already formatted
    /// signing date.
    pub fn resolve(self, record: &CaseRecord, signed_on: &str) -> String {
        let attorney = &record.attorney;
        let court = &record.court;
        let estate = &record.estate;

        match self {
            TextSource::AttorneyLine => attorney_line(record),
            TextSource::AttorneyBlock => [
                attorney_line(record),
                attorney.firm_name.clone(),
                attorney.street.clone(),
                format!("{}, {} {}", attorney.city, attorney.state, attorney.zip),
                format!("TEL: {}  FAX: {}", attorney.phone, attorney.fax),
                attorney.email.clone(),
            ]
            .join("\n"),
            TextSource::AttorneyBar => attorney.bar_number.clone(),
            TextSource::FirmName => attorney.firm_name.clone(),
            TextSource::FirmStreet => attorney.street.clone(),
            TextSource::FirmCity => attorney.city.clone(),
            TextSource::FirmState => attorney.state.clone(),
            TextSource::FirmZip => attorney.zip.clone(),
            TextSource::FirmPhone => attorney.phone.clone(),
            TextSource::FirmFax => attorney.fax.clone(),
            TextSource::FirmEmail => attorney.email.clone(),
            TextSource::AttorneyFor => format!("PETITIONER, {}", record.petitioner.name),
            TextSource::CourtCounty => court.county.clone(),
            TextSource::CourtStreet | TextSource::CourtMailing => court.street.clone(),
            TextSource::CourtCityZip => format!("{} CA {}", court.city, court.zip),
            TextSource::CourtBranch => court.branch.clone(),
            TextSource::CaseNumber => record.case_number.clone(),
            TextSource::Newspaper => record.publication.newspaper.clone(),
            TextSource::DecedentName => record.decedent.name.clone(),
            TextSource::DeathDate => record.decedent.death_date.clone(),
            TextSource::DeathPlace => record.decedent.death_place.clone(),
            TextSource::DeathAddress => record.decedent.death_address.clone(),
            TextSource::PetitionerName => record.petitioner.name.clone(),
            TextSource::PetitionerAddress => record.petitioner.address.clone(),
            TextSource::PetitionerPhone => record.petitioner.phone.clone(),
            TextSource::PetitionerBirthDate => record.petitioner.birth_date.clone(),
            TextSource::PetitionerLicense => record.petitioner.drivers_license.clone(),
            TextSource::PetitionerLicenseState => record.petitioner.license_state.clone(),
            TextSource::BondAmount => {
                if record.administration.bond_required {
                    record.administration.bond_amount.clone()
                } else {
                    String::new()
                }
            }
            TextSource::PersonalProperty => estate.personal_property.clone(),
            TextSource::RealPropertyGross => estate.real_property_gross.clone(),
            TextSource::RealPropertyEncumbrance => estate.real_property_encumbrance.clone(),
            TextSource::RealPropertyNet => estate.real_property_net.clone(),
            TextSource::EstateTotal => estate.total.clone(),
            TextSource::WillDate if estate.has_will => estate.will_date.clone(),
            TextSource::CodicilDate if estate.has_will => estate.codicil_date.clone(),
            TextSource::WillDate | TextSource::CodicilDate => String::new(),
            TextSource::HeirsTable => heirs_table(&record.heirs),
            TextSource::HearingDate => record.hearing.date.clone(),
            TextSource::HearingTime => record.hearing.time.clone(),
            TextSource::HearingDepartment => record.hearing.department.clone(),
            TextSource::SigningDate => signed_on.to_string(),
            TextSource::ExecutionPlace => format!("{}, CALIFORNIA", court.city),
        }
    }
}

impl Condition {
    pub fn holds(self, record: &CaseRecord) -> bool {
        let has_will = record.estate.has_will;
        let full = record.administration.kind == AdministrationType::Full;

        match self {
            Condition::Always => true,
            Condition::HasWill => has_will,
            Condition::NoWill => !has_will,
            Condition::HasCodicil => has_will && !record.estate.codicil_date.is_empty(),
            Condition::NamedExecutor => has_will && record.petitioner.is_executor,
            Condition::AdministratorWithWill => has_will && !record.petitioner.is_executor,
            Condition::FullAuthority => full,
            Condition::LimitedAuthority => !full,
            Condition::BondWaived => !record.administration.bond_required,
            Condition::BondRequired => record.administration.bond_required,
            Condition::Resident => record.decedent.is_resident,
            Condition::NonResident => !record.decedent.is_resident,
            Condition::SelfProvingWill => has_will && record.estate.will_self_proving,
        }
    }
}

fn attorney_line(record: &CaseRecord) -> String {
    format!("{}, SBN {}", record.attorney.name, record.attorney.bar_number)
}

/// One line per heir, blank parts skipped.
fn heirs_table(heirs: &[Heir]) -> String {
    heirs
        .iter()
        .map(|heir| {
            [&heir.name, &heir.relationship, &heir.age, &heir.address]
                .into_iter()
                .filter(|part| !part.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
