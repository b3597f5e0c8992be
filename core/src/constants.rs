//! Centralized constants
//!
//! Environment variable names, payload markers and render defaults live here
//! so the loader, formatter and encoder agree on them.

use qrcode::EcLevel;

/// Network name variable (required)
pub const ENV_SSID: &str = "WIFI_SSID";

/// Network credential variable (required, may be empty)
pub const ENV_PASSWORD: &str = "WIFI_PASSWORD";

/// Authentication type variable: `WPA`, `WEP` or `nopass`
pub const ENV_SECURITY: &str = "WIFI_SECURITY";

/// Hidden network flag variable: `true` or `false`
pub const ENV_HIDDEN: &str = "WIFI_HIDDEN";

/// Env-override file looked up when none is given explicitly
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Scheme prefix of the Wi-Fi QR payload
pub const PAYLOAD_SCHEME: &str = "WIFI:";

/// Characters with special meaning inside a payload field
pub const RESERVED_CHARS: &[char] = &[';', ',', '\\', '"', ':'];

/// Appended to the SSID to name the saved image
pub const OUTPUT_FILE_SUFFIX: &str = "_qr_code.png";

/// Quartile: roughly 25% of codewords can be restored
pub const DEFAULT_EC_LEVEL: EcLevel = EcLevel::Q;

/// Device pixels per QR module
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Quiet zone width, in modules
pub const DEFAULT_BORDER: u32 = 4;

/// Luma value of dark modules (black)
pub const DEFAULT_DARK: u8 = 0;

/// Luma value of light modules and the border (white)
pub const DEFAULT_LIGHT: u8 = 255;
