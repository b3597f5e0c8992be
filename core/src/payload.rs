//! Wi-Fi QR payload formatting
//!
//! Produces the `WIFI:T:<security>;S:<ssid>;P:<password>;H:<hidden>;;` text
//! that camera apps recognise. Field values are inserted verbatim: reserved
//! characters are not escaped (see [`WifiConfiguration::reserved_fields`]).

use crate::config::WifiConfiguration;
use crate::constants::PAYLOAD_SCHEME;

/// Format the payload for `config`.
pub fn wifi_connection_string(config: &WifiConfiguration) -> String {
    format!(
        "{}T:{};S:{};P:{};H:{};;",
        PAYLOAD_SCHEME, config.security, config.ssid, config.password, config.hidden,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_configuration, MapSource, Security};

    #[test]
    fn test_home_network() {
        let source = MapSource::new()
            .with("WIFI_SSID", "HomeNet")
            .with("WIFI_PASSWORD", "pass123");
        let config = load_configuration(&source).unwrap();

        assert_eq!(
            wifi_connection_string(&config),
            "WIFI:T:WPA;S:HomeNet;P:pass123;H:false;;"
        );
    }

    #[test]
    fn test_open_hidden_guest_network() {
        let source = MapSource::new()
            .with("WIFI_SSID", "Guest")
            .with("WIFI_PASSWORD", "")
            .with("WIFI_SECURITY", "nopass")
            .with("WIFI_HIDDEN", "true");
        let config = load_configuration(&source).unwrap();

        assert_eq!(
            wifi_connection_string(&config),
            "WIFI:T:nopass;S:Guest;P:;H:true;;"
        );
    }

    #[test]
    fn test_wep() {
        let config = WifiConfiguration::new("Legacy", "abcde").with_security(Security::Wep);
        assert_eq!(
            wifi_connection_string(&config),
            "WIFI:T:WEP;S:Legacy;P:abcde;H:false;;"
        );
    }

    #[test]
    fn test_fields_inserted_verbatim() {
        let config = WifiConfiguration::new(" Café;Net ", "a\\b,\"c\"").with_hidden(true);
        assert_eq!(
            wifi_connection_string(&config),
            "WIFI:T:WPA;S: Café;Net ;P:a\\b,\"c\";H:true;;"
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let config = WifiConfiguration::new("HomeNet", "pass123");
        assert_eq!(wifi_connection_string(&config), wifi_connection_string(&config));
    }
}
