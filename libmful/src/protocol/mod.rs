// libmful/src/protocol/mod.rs

pub mod commands;
pub mod crc;

pub use commands::*;
pub use crc::{append_crc_a, crc_a};
