//! Static county -> probate courthouse lookup.

use std::collections::HashMap;

/// Street address of the courthouse that hears probate matters for a county.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtAddress {
    pub branch: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl CourtAddress {
    pub fn new(branch: &str, street: &str, city: &str, zip: &str) -> Self {
        Self {
            branch: branch.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            zip: zip.to_string(),
        }
    }
}

/// County table keyed by uppercased county name, with a mandatory fallback
/// entry for unknown or missing counties.
#[derive(Debug, Clone)]
pub struct CourtDirectory {
    entries: HashMap<String, CourtAddress>,
    fallback: CourtAddress,
}

impl CourtDirectory {
    pub fn new(fallback: CourtAddress) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn with_entry(mut self, county: &str, address: CourtAddress) -> Self {
        self.entries.insert(county_key(county), address);
        self
    }

    /// Southern and central California probate courthouses. Falls back to Los Angeles.
    pub fn california() -> Self {
        let los_angeles = CourtAddress::new(
            "STANLEY MOSK COURTHOUSE",
            "111 N HILL ST",
            "LOS ANGELES",
            "90012",
        );

        Self::new(los_angeles.clone())
            .with_entry("LOS ANGELES", los_angeles)
            .with_entry(
                "ORANGE",
                CourtAddress::new(
                    "LAMOREAUX JUSTICE CENTER",
                    "341 THE CITY DRIVE S",
                    "ORANGE",
                    "92868",
                ),
            )
            .with_entry(
                "SAN DIEGO",
                CourtAddress::new("CENTRAL COURTHOUSE", "1100 UNION ST", "SAN DIEGO", "92101"),
            )
            .with_entry(
                "VENTURA",
                CourtAddress::new("HALL OF JUSTICE", "800 S VICTORIA AVE", "VENTURA", "93009"),
            )
            .with_entry(
                "RIVERSIDE",
                CourtAddress::new(
                    "RIVERSIDE HISTORIC COURTHOUSE",
                    "4050 MAIN ST",
                    "RIVERSIDE",
                    "92501",
                ),
            )
            .with_entry(
                "SAN BERNARDINO",
                CourtAddress::new(
                    "SAN BERNARDINO JUSTICE CENTER",
                    "247 W THIRD ST",
                    "SAN BERNARDINO",
                    "92415",
                ),
            )
            .with_entry(
                "SANTA BARBARA",
                CourtAddress::new("ANACAPA DIVISION", "1100 ANACAPA ST", "SANTA BARBARA", "93101"),
            )
    }

    /// Look up a county, ignoring case and surrounding whitespace.
    pub fn resolve(&self, county: &str) -> &CourtAddress {
        self.entries
            .get(&county_key(county))
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, county: &str) -> bool {
        self.entries.contains_key(&county_key(county))
    }

    pub fn counties(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

pub(crate) fn county_key(county: &str) -> String {
    county.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let courts = CourtDirectory::california();
        assert_eq!(courts.resolve(" orange ").city, "ORANGE");
        assert_eq!(courts.resolve("San Diego").street, "1100 UNION ST");
    }

    #[test]
    fn test_unknown_and_blank_counties_fall_back() {
        let courts = CourtDirectory::california();
        let los_angeles = courts.resolve("LOS ANGELES");
        assert_eq!(courts.resolve("UNKNOWN COUNTY"), los_angeles);
        assert_eq!(courts.resolve(""), los_angeles);
        assert!(!courts.contains("KERN"));
    }

    #[test]
    fn test_required_counties_present() {
        let courts = CourtDirectory::california();
        for county in ["LOS ANGELES", "ORANGE", "SAN DIEGO", "VENTURA", "RIVERSIDE"] {
            assert!(courts.contains(county), "{county} missing");
        }
        assert_eq!(courts.counties().count(), 7);
    }
}
