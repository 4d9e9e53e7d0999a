//! Configuration: the defaults injected into the intake normalizer and the
//! server settings read from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::intake::court::CourtDirectory;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";
pub const DEFAULT_NEWSPAPER: &str = "DAILY JOURNAL";
pub const DEFAULT_COUNTY: &str = "LOS ANGELES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Firm identity printed in the attorney block of every form when the intake
/// payload does not name one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmIdentity {
    pub attorney_name: String,
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

impl Default for FirmIdentity {
    fn default() -> Self {
        Self {
            attorney_name: "ROZSA GYENE, ESQ.".to_string(),
            bar_number: "208356".to_string(),
            firm_name: "LAW OFFICES OF ROZSA GYENE".to_string(),
            street: "450 N BRAND BLVD SUITE 600".to_string(),
            city: "GLENDALE".to_string(),
            state: "CA".to_string(),
            zip: "91203".to_string(),
            phone: "818-291-6217".to_string(),
            fax: "818-291-6205".to_string(),
            email: "ROZSAGYENELAW@YAHOO.COM".to_string(),
        }
    }
}

/// Immutable defaults consumed by [`crate::intake::Normalizer`].
#[derive(Debug, Clone)]
pub struct IntakeDefaults {
    pub firm: FirmIdentity,
    /// Newspaper named in the DE-111 publication section.
    pub newspaper: String,
    /// County used when the payload leaves `court_county` blank.
    pub default_county: String,
    pub courts: CourtDirectory,
}

impl Default for IntakeDefaults {
    fn default() -> Self {
        Self {
            firm: FirmIdentity::default(),
            newspaper: DEFAULT_NEWSPAPER.to_string(),
            default_county: DEFAULT_COUNTY.to_string(),
            courts: CourtDirectory::california(),
        }
    }
}

/// Process-wide settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_dir: PathBuf,
    pub intake: IntakeDefaults,
}

impl ServerConfig {
    /// Load settings from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port: {}", raw, err),
            })?,
            None => DEFAULT_PORT,
        };

        let mut firm = FirmIdentity::default();
        let overrides: [(&str, &mut String); 10] = [
            ("FIRM_ATTORNEY_NAME", &mut firm.attorney_name),
            ("FIRM_BAR_NUMBER", &mut firm.bar_number),
            ("FIRM_NAME", &mut firm.firm_name),
            ("FIRM_STREET", &mut firm.street),
            ("FIRM_CITY", &mut firm.city),
            ("FIRM_STATE", &mut firm.state),
            ("FIRM_ZIP", &mut firm.zip),
            ("FIRM_PHONE", &mut firm.phone),
            ("FIRM_FAX", &mut firm.fax),
            ("FIRM_EMAIL", &mut firm.email),
        ];
        for (key, slot) in overrides {
            if let Some(value) = get(key) {
                *slot = value;
            }
        }

        let intake = IntakeDefaults {
            firm,
            newspaper: get("PUBLICATION_NEWSPAPER").unwrap_or_else(|| DEFAULT_NEWSPAPER.to_string()),
            ..IntakeDefaults::default()
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            template_dir: get("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
            intake,
        })
    }
}
