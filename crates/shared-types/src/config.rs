use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Practice details shown in the public header, contact block and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClinicInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub city: String,
    pub email: String,
    pub phone: String,
}

impl Default for ClinicInfo {
    fn default() -> Self {
        Self {
            name: "HealthPoint".to_string(),
            tagline: "Providing compassionate care with cutting-edge technology. Your health is our priority.".to_string(),
            address: "123 Health St".to_string(),
            city: "Wellness City, 12345".to_string(),
            email: "info@healthpoint.com".to_string(),
            phone: "(123) 456-7890".to_string(),
        }
    }
}

/// Logger settings read at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults, so a missing or partial file is still valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub clinic: ClinicInfo,
    #[serde(default)]
    pub log: LogSettings,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.clinic.name, "HealthPoint");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn partial_clinic_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [clinic]
            name = "Riverside Clinic"
            "#,
        )
        .unwrap();
        assert_eq!(config.clinic.name, "Riverside Clinic");
        assert_eq!(config.clinic.email, ClinicInfo::default().email);
        assert_eq!(config.log, LogSettings::default());
    }

    #[test]
    fn full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [clinic]
            name = "North"
            tagline = "Care"
            address = "1 Main"
            city = "Town"
            email = "a@b.c"
            phone = "1"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.clinic.city, "Town");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let err = AppConfig::from_toml_str("clinic = [").unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::InvalidConfig);
    }
}
