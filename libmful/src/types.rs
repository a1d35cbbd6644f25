// libmful/src/types.rs

use crate::Error;
use crate::constants::{MAX_UID_LEN, PAGE_SIZE};
use std::convert::TryFrom;

/// UID - Newtype Pattern (4, 7 or 10 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: usize,
}

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len(),
        })
    }

    /// Parse a UID from hex text. Whitespace between byte groups is accepted.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let bytes = crate::utils::parse_hex(text).map_err(|_| Error::InvalidLength {
            expected: MAX_UID_LEN,
            actual: text.len(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// ATQA - the 2-byte answer-to-request returned at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Ultralight-class tags answer with 0x44 in byte 1.
    pub fn is_ultralight(&self) -> bool {
        self.0[1] == crate::constants::ATQA_ULTRALIGHT
    }
}

/// A selected passive ISO14443A target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub uid: Uid,
    pub atqa: Atqa,
    pub sak: u8,
}

impl Target {
    pub fn new(uid: Uid, atqa: Atqa, sak: u8) -> Self {
        Self { uid, atqa, sak }
    }
}

/// Password - Newtype Pattern (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password([u8; 4]);

impl Password {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// PACK - the 2-byte password acknowledge returned on successful auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pack([u8; 2]);

impl Pack {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Pack {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// PageData - one 4-byte page payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData([u8; PAGE_SIZE]);

impl PageData {
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PAGE_SIZE {
            return Err(Error::InvalidLength {
                expected: PAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PAGE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}
