// libmful/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("device configuration failed: {0}")]
    DeviceConfig(String),

    #[error("transceive failed: {0}")]
    Transceive(String),

    #[error("tag was removed during write")]
    TagLost,

    #[error("unknown version response byte: {0:#04x}")]
    UnknownVariant(u8),

    #[error("tag is not Ultralight-class: atqa={atqa:02x?}")]
    NotUltralight { atqa: [u8; 2] },

    #[error("invalid password format: expected exactly 8 hex digits")]
    InvalidPasswordFormat,

    #[error("password authentication failed")]
    AuthFailed,

    #[error("unable to unlock tag for UID writes")]
    MagicUnlockFailed,

    #[error("no tag found")]
    NoTag,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
