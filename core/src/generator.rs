//! Ties configuration, payload formatting and encoding together

use std::path::{Path, PathBuf};

use crate::config::WifiConfiguration;
use crate::constants::OUTPUT_FILE_SUFFIX;
use crate::encoder::{QrEncoder, QrImage};
use crate::payload::wifi_connection_string;
use crate::Result;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQr {
    /// Where the image was written
    pub path: PathBuf,
    /// The text encoded in the image
    pub payload: String,
}

/// File name for the image of network `ssid`.
///
/// The SSID is used as-is, path separators included, so an SSID such as
/// `a/b` or `/abs` resolves outside the output directory once joined.
pub fn output_file_name(ssid: &str) -> String {
    format!("{}{}", ssid, OUTPUT_FILE_SUFFIX)
}

/// Directory holding the running executable, or `.` if it cannot be found.
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Renders configurations to image files in one directory
pub struct QrGenerator<E> {
    encoder: E,
    output_dir: PathBuf,
}

impl<E: QrEncoder> QrGenerator<E> {
    pub fn new(encoder: E, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            encoder,
            output_dir: output_dir.into(),
        }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the image for `config` is written to
    pub fn output_path(&self, config: &WifiConfiguration) -> PathBuf {
        self.output_dir.join(output_file_name(&config.ssid))
    }

    /// Encode `config` and save it, overwriting any previous image.
    pub fn generate(&self, config: &WifiConfiguration) -> Result<GeneratedQr> {
        let reserved = config.reserved_fields();
        if !reserved.is_empty() {
            tracing::warn!(
                "{} contains reserved characters (; , \\ \" :) which are not escaped; scanners may misread the code",
                reserved.join(" and ")
            );
        }

        let payload = wifi_connection_string(config);
        let image = self.encoder.encode(&payload)?;

        let path = self.output_path(config);
        image.save(&path)?;

        let (width, height) = image.dimensions();
        tracing::debug!("wrote {}x{} QR code to {}", width, height, path.display());

        Ok(GeneratedQr { path, payload })
    }
}
