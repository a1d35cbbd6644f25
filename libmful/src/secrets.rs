// libmful/src/secrets.rs

//! Password/PACK handling.
//!
//! EV1 and NTAG tags never return their password or PACK in a memory read,
//! so a dump can only contain them if the caller supplied the password and
//! the tag acknowledged it. The overlay records both into the dump image at
//! the variant's configuration pages, once, after the bulk read finishes.

use crate::image::DumpImage;
use crate::types::{Pack, Password};
use crate::variant::Variant;
use crate::{Error, Result};

/// The password/PACK pair held for the duration of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secrets {
    pub password: Password,
    pub pack: Pack,
}

/// Parse a password from hex text.
///
/// The format is exactly eight hex digits (`XXXXXXXX`), case-insensitive,
/// with no separators. Anything else is rejected before any radio activity.
pub fn parse_password(text: &str) -> Result<Password> {
    if text.len() != 8 || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidPasswordFormat);
    }
    let mut bytes = [0u8; 4];
    for (i, chunk) in text.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|_| Error::InvalidPasswordFormat)?;
        bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| Error::InvalidPasswordFormat)?;
    }
    Ok(Password::from_bytes(bytes))
}

/// Record the session secrets into the dump image at the variant's
/// configuration pages. The password fills its page; the PACK fills the
/// first two bytes of its page. No-op for variants without secret pages.
pub fn overlay(image: &mut DumpImage, variant: &Variant, secrets: &Secrets) {
    let (Some(pwd_page), Some(pack_page)) = (variant.password_page, variant.pack_page) else {
        return;
    };

    image.set_page(pwd_page, crate::types::PageData::from_bytes(*secrets.password.as_bytes()));

    let mut pack_bytes = *image.page(pack_page).as_bytes();
    pack_bytes[..2].copy_from_slice(secrets.pack.as_bytes());
    image.set_page(pack_page, crate::types::PageData::from_bytes(pack_bytes));
}
