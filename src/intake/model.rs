use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Attorney {
    pub name: String,
    pub bar_number: String,
    pub firm_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Decedent {
    pub name: String,
    /// `MM/DD/YYYY` or empty.
    #[schema(example = "03/05/2024")]
    pub death_date: String,
    pub death_place: String,
    pub death_address: String,
    pub is_resident: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Petitioner {
    pub name: String,
    pub relationship: String,
    pub address: String,
    pub phone: String,
    pub is_executor: bool,
    /// `MM/DD/YYYY` or empty. Only printed on the DE-147S supplement.
    pub birth_date: String,
    pub drivers_license: String,
    pub license_state: String,
}

/// Estate values, all rendered as `$1,234.56` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Estate {
    #[schema(example = "$50,000.00")]
    pub personal_property: String,
    pub real_property_gross: String,
    pub real_property_encumbrance: String,
    pub real_property_net: String,
    pub total: String,
    pub has_will: bool,
    pub will_date: String,
    pub codicil_date: String,
    pub will_self_proving: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Heir {
    pub name: String,
    pub relationship: String,
    pub age: String,
    pub address: String,
}

/// Independent Administration of Estates Act authority requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdministrationType {
    Full,
    Limited,
}

impl AdministrationType {
    /// `"full"` in any casing selects full authority; everything else is limited.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("full") {
            Self::Full
        } else {
            Self::Limited
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Limited => "limited",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Administration {
    #[serde(rename = "type")]
    pub kind: AdministrationType,
    pub bond_required: bool,
    pub bond_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Court {
    pub county: String,
    pub branch: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hearing {
    pub date: String,
    pub time: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Publication {
    pub newspaper: String,
}

/// Normalized probate case, ready to be mapped onto form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaseRecord {
    pub attorney: Attorney,
    pub decedent: Decedent,
    pub petitioner: Petitioner,
    pub estate: Estate,
    /// Submission order is preserved.
    pub heirs: Vec<Heir>,
    pub administration: Administration,
    pub court: Court,
    pub case_number: String,
    pub hearing: Hearing,
    pub publication: Publication,
}
