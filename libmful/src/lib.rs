// libmful/src/lib.rs

//! libmful
//!
//! Pure Rust dump/restore engine for MIFARE Ultralight and NTAG tags.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod image;
pub mod plan;
pub mod prelude;
pub mod protocol;
pub mod radio;
pub mod secrets;
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;
pub mod variant;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
