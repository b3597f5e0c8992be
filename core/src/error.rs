use thiserror::Error;

/// Invalid or missing Wi-Fi settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("SSID is a required field")]
    MissingSsid,

    #[error("password is a required field")]
    MissingPassword,

    #[error("security must be one of WPA, WEP or nopass")]
    InvalidSecurity(String),

    #[error("hidden must be one of true, false")]
    InvalidHidden(String),
}

/// Wifiqr error types
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::Encode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
