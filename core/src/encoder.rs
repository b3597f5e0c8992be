//! QR encoder capability and its PNG implementation

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::render::unicode;
use qrcode::{Color, EcLevel, QrCode};

use crate::constants::{
    DEFAULT_BORDER, DEFAULT_DARK, DEFAULT_EC_LEVEL, DEFAULT_LIGHT, DEFAULT_MODULE_SIZE,
};
use crate::Result;

/// A rendered code that can be written to disk.
pub trait QrImage {
    /// Write the image to `path`, replacing any existing file.
    fn save(&self, path: &Path) -> Result<()>;

    /// Width and height in device pixels
    fn dimensions(&self) -> (u32, u32);
}

/// Turns a text payload into a QR image.
pub trait QrEncoder {
    type Image: QrImage;

    fn encode(&self, payload: &str) -> Result<Self::Image>;
}

/// Visual parameters for rendered codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub ec_level: EcLevel,
    /// Device pixels per module
    pub module_size: u32,
    /// Quiet zone, in modules
    pub border: u32,
    pub dark: Luma<u8>,
    pub light: Luma<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ec_level: DEFAULT_EC_LEVEL,
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            dark: Luma([DEFAULT_DARK]),
            light: Luma([DEFAULT_LIGHT]),
        }
    }
}

impl RenderOptions {
    /// Paint `code` module by module onto a light canvas.
    fn paint(&self, code: &QrCode) -> GrayImage {
        let modules = code.width() as u32;
        let scale = self.module_size.max(1);
        let size = (modules + 2 * self.border) * scale;

        let mut img = GrayImage::from_pixel(size, size, self.light);

        for (i, color) in code.to_colors().iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let x = (i as u32 % modules + self.border) * scale;
            let y = (i as u32 / modules + self.border) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x + dx, y + dy, self.dark);
                }
            }
        }

        img
    }
}

/// Grayscale QR image saved as PNG
#[derive(Debug, Clone)]
pub struct PngImage {
    image: GrayImage,
    modules: usize,
}

impl PngImage {
    /// Modules per side, excluding the border
    pub fn modules(&self) -> usize {
        self.modules
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }
}

impl QrImage for PngImage {
    fn save(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Encoder backed by the `qrcode` and `image` crates.
///
/// The smallest QR version that holds the payload at the configured error
/// correction level is chosen automatically.
#[derive(Debug, Clone, Default)]
pub struct PngEncoder {
    options: RenderOptions,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl QrEncoder for PngEncoder {
    type Image = PngImage;

    fn encode(&self, payload: &str) -> Result<PngImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.options.ec_level)?;
        tracing::debug!("encoded {} bytes into {:?}", payload.len(), code.version());

        Ok(PngImage {
            image: self.options.paint(&code),
            modules: code.width(),
        })
    }
}

/// Render `payload` with Unicode half blocks, two modules per character row.
pub fn terminal_preview(payload: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), DEFAULT_EC_LEVEL)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
