//! Generate command implementation.

use std::path::{Path, PathBuf};

use wifiqr_core::generator::default_output_dir;
use wifiqr_core::{load_configuration, ConfigSource, PngEncoder, QrGenerator};

use crate::preview::open_image;

/// Load the settings, save the QR image and optionally open it.
pub fn generate(
    source: &impl ConfigSource,
    output_dir: Option<PathBuf>,
    preview: bool,
) -> anyhow::Result<()> {
    let config = load_configuration(source)?;

    let output_dir = output_dir.unwrap_or_else(default_output_dir);
    let generator = QrGenerator::new(PngEncoder::new(), output_dir);
    let generated = generator.generate(&config)?;

    println!("{}", confirmation(&generated.path));

    if preview {
        open_image(&generated.path);
    }

    Ok(())
}

/// Line printed once the image is written
fn confirmation(path: &Path) -> String {
    format!("QR code saved to {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_names_path() {
        let path = Path::new("/opt/wifiqr/HomeNet_qr_code.png");
        assert_eq!(
            confirmation(path),
            "QR code saved to /opt/wifiqr/HomeNet_qr_code.png"
        );
    }
}
