// libmful/src/protocol/commands.rs

//! Raw command frame builders.
//!
//! These are the non-standard Ultralight-family extensions that must travel
//! outside the transceiver's normal framing layer: the EV1/NTAG version
//! query, password authentication, the 14443A halt, and the two-step clone
//! unlock. Each byte-frame builder appends CRC_A itself; the 7-bit unlock
//! frame is sent without one.

use crate::protocol::crc::append_crc_a;
use crate::types::Password;

/// GET_VERSION command byte.
pub const VERSION_QUERY: u8 = 0x60;

/// PWD_AUTH command byte.
pub const PWD_AUTH: u8 = 0x1b;

/// HLTA command bytes.
pub const HALT: [u8; 2] = [0x50, 0x00];

/// First unlock step: a short frame of 7 bits.
pub const UNLOCK_STEP1: u8 = 0x40;
pub const UNLOCK_STEP1_BITS: usize = 7;

/// Second unlock step: a single full byte.
pub const UNLOCK_STEP2: u8 = 0x43;

/// Build the 3-byte version query frame: `60` + CRC_A.
pub fn version_query() -> Vec<u8> {
    let mut frame = vec![VERSION_QUERY];
    append_crc_a(&mut frame);
    frame
}

/// Build the 7-byte password authentication frame: `1B` + password + CRC_A.
pub fn password_auth(password: &Password) -> Vec<u8> {
    let mut frame = Vec::with_capacity(7);
    frame.push(PWD_AUTH);
    frame.extend_from_slice(password.as_bytes());
    append_crc_a(&mut frame);
    frame
}

/// Build the 4-byte halt frame: `50 00` + CRC_A.
pub fn halt() -> Vec<u8> {
    let mut frame = HALT.to_vec();
    append_crc_a(&mut frame);
    frame
}
