//! Payload command implementation.

use wifiqr_core::{load_configuration, wifi_connection_string, ConfigSource};

/// Print the `WIFI:` payload for the configured network.
pub fn print_payload(source: &impl ConfigSource) -> anyhow::Result<()> {
    let config = load_configuration(source)?;
    println!("{}", wifi_connection_string(&config));
    Ok(())
}
