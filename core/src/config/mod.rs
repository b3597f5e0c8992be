//! Wi-Fi settings and their validation.

mod source;

pub use source::{ConfigSource, EnvSource, LayeredSource, MapSource};

use std::fmt;
use std::str::FromStr;

use crate::constants::{ENV_HIDDEN, ENV_PASSWORD, ENV_SECURITY, ENV_SSID, RESERVED_CHARS};
use crate::error::ConfigurationError;

/// Authentication type advertised in the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Security {
    #[default]
    Wpa,
    Wep,
    NoPass,
}

impl Security {
    /// Payload spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Security::Wpa => "WPA",
            Security::Wep => "WEP",
            Security::NoPass => "nopass",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Security {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WPA" => Ok(Security::Wpa),
            "WEP" => Ok(Security::Wep),
            "nopass" => Ok(Security::NoPass),
            other => Err(ConfigurationError::InvalidSecurity(other.to_string())),
        }
    }
}

/// Validated Wi-Fi credentials
#[derive(Clone, PartialEq, Eq)]
pub struct WifiConfiguration {
    pub ssid: String,
    pub password: String,
    pub security: Security,
    pub hidden: bool,
}

impl fmt::Debug for WifiConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiConfiguration")
            .field("ssid", &self.ssid)
            .field("password", &"********")
            .field("security", &self.security)
            .field("hidden", &self.hidden)
            .finish()
    }
}

impl WifiConfiguration {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
            security: Security::default(),
            hidden: false,
        }
    }

    pub fn with_security(mut self, security: Security) -> Self {
        self.security = security;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Names of the free-text fields holding characters that the payload
    /// format reserves. Such values are emitted unescaped, so scanners may
    /// misread them.
    pub fn reserved_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.ssid.contains(RESERVED_CHARS) {
            fields.push("ssid");
        }
        if self.password.contains(RESERVED_CHARS) {
            fields.push("password");
        }
        fields
    }
}

/// Read and validate the four Wi-Fi settings from `source`.
///
/// `WIFI_SSID` and `WIFI_PASSWORD` must be set (an empty password is fine).
/// `WIFI_SECURITY` defaults to `WPA` and `WIFI_HIDDEN` to `false` when unset;
/// when set they must match exactly.
pub fn load_configuration<S: ConfigSource + ?Sized>(
    source: &S,
) -> Result<WifiConfiguration, ConfigurationError> {
    let ssid = source.get(ENV_SSID).ok_or(ConfigurationError::MissingSsid)?;
    let password = source
        .get(ENV_PASSWORD)
        .ok_or(ConfigurationError::MissingPassword)?;

    let security = match source.get(ENV_SECURITY) {
        Some(value) => value.parse()?,
        None => Security::default(),
    };

    let hidden = match source.get(ENV_HIDDEN) {
        Some(value) => parse_hidden(&value)?,
        None => false,
    };

    let config = WifiConfiguration { ssid, password, security, hidden };
    tracing::debug!("loaded configuration: {:?}", config);
    Ok(config)
}

fn parse_hidden(value: &str) -> Result<bool, ConfigurationError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigurationError::InvalidHidden(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MapSource {
        MapSource::new()
            .with(ENV_SSID, "HomeNet")
            .with(ENV_PASSWORD, "pass123")
    }

    #[test]
    fn test_defaults_applied() {
        let config = load_configuration(&base()).unwrap();

        assert_eq!(config.ssid, "HomeNet");
        assert_eq!(config.password, "pass123");
        assert_eq!(config.security, Security::Wpa);
        assert!(!config.hidden);
    }

    #[test]
    fn test_missing_ssid() {
        let source = MapSource::new().with(ENV_PASSWORD, "pass123");
        let err = load_configuration(&source).unwrap_err();

        assert_eq!(err, ConfigurationError::MissingSsid);
        assert_eq!(err.to_string(), "SSID is a required field");
    }

    #[test]
    fn test_missing_password() {
        let source = MapSource::new().with(ENV_SSID, "HomeNet");
        let err = load_configuration(&source).unwrap_err();

        assert_eq!(err, ConfigurationError::MissingPassword);
        assert_eq!(err.to_string(), "password is a required field");
    }

    #[test]
    fn test_ssid_checked_before_password() {
        let err = load_configuration(&MapSource::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingSsid);
    }

    #[test]
    fn test_empty_password_is_present() {
        let source = MapSource::new()
            .with(ENV_SSID, "Guest")
            .with(ENV_PASSWORD, "")
            .with(ENV_SECURITY, "nopass");
        let config = load_configuration(&source).unwrap();

        assert_eq!(config.password, "");
        assert_eq!(config.security, Security::NoPass);
    }

    #[test]
    fn test_nopass_still_requires_password() {
        let source = MapSource::new()
            .with(ENV_SSID, "Guest")
            .with(ENV_SECURITY, "nopass");

        assert_eq!(
            load_configuration(&source).unwrap_err(),
            ConfigurationError::MissingPassword
        );
    }

    #[test]
    fn test_valid_security_values() {
        for (raw, expected) in [
            ("WPA", Security::Wpa),
            ("WEP", Security::Wep),
            ("nopass", Security::NoPass),
        ] {
            let config = load_configuration(&base().with(ENV_SECURITY, raw)).unwrap();
            assert_eq!(config.security, expected);
            assert_eq!(config.security.to_string(), raw);
        }
    }

    #[test]
    fn test_invalid_security() {
        let err = load_configuration(&base().with(ENV_SECURITY, "OPEN")).unwrap_err();

        assert_eq!(err, ConfigurationError::InvalidSecurity("OPEN".to_string()));
        assert_eq!(err.to_string(), "security must be one of WPA, WEP or nopass");
    }

    #[test]
    fn test_security_is_case_sensitive() {
        for raw in ["wpa", "NOPASS", "WPA2", ""] {
            assert!(load_configuration(&base().with(ENV_SECURITY, raw)).is_err());
        }
    }

    #[test]
    fn test_hidden_values() {
        let hidden = load_configuration(&base().with(ENV_HIDDEN, "true")).unwrap();
        let visible = load_configuration(&base().with(ENV_HIDDEN, "false")).unwrap();

        assert!(hidden.hidden);
        assert!(!visible.hidden);
    }

    #[test]
    fn test_invalid_hidden() {
        let err = load_configuration(&base().with(ENV_HIDDEN, "yes")).unwrap_err();

        assert_eq!(err, ConfigurationError::InvalidHidden("yes".to_string()));
        assert_eq!(err.to_string(), "hidden must be one of true, false");

        assert!(load_configuration(&base().with(ENV_HIDDEN, "True")).is_err());
    }

    #[test]
    fn test_values_not_trimmed() {
        let source = MapSource::new()
            .with(ENV_SSID, " Home Net ")
            .with(ENV_PASSWORD, "p w ");
        let config = load_configuration(&source).unwrap();

        assert_eq!(config.ssid, " Home Net ");
        assert_eq!(config.password, "p w ");
    }

    #[test]
    fn test_reserved_fields() {
        assert!(WifiConfiguration::new("HomeNet", "pass123").reserved_fields().is_empty());
        assert_eq!(
            WifiConfiguration::new("Cafe;Free", "pass123").reserved_fields(),
            vec!["ssid"]
        );
        assert_eq!(
            WifiConfiguration::new("Cafe", "a\\b,c").reserved_fields(),
            vec!["password"]
        );
    }

    #[test]
    fn test_debug_masks_password() {
        let config = WifiConfiguration::new("HomeNet", "pass123");
        let debug = format!("{:?}", config);

        assert!(debug.contains("HomeNet"));
        assert!(!debug.contains("pass123"));
    }
}
