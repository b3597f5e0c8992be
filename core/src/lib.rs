//! Wifiqr Core - Wi-Fi credentials as QR codes
//!
//! Loads network settings from the environment (optionally backed by a
//! `.env` file), formats them as the `WIFI:` payload understood by phone
//! cameras and renders that payload as a PNG QR code.

pub mod config;
pub mod constants;
pub mod encoder;
pub mod generator;
pub mod payload;

mod error;

pub use error::{ConfigurationError, Error, Result};

// Re-export key types for convenience
pub use config::{load_configuration, ConfigSource, LayeredSource, Security, WifiConfiguration};
pub use encoder::{PngEncoder, QrEncoder, QrImage, RenderOptions};
pub use generator::{GeneratedQr, QrGenerator};
pub use payload::wifi_connection_string;
