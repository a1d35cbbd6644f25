// libmful/src/prelude.rs

pub use crate::image::DumpImage;
pub use crate::plan::{PageAction, WriteFlags, WritePlan};
pub use crate::radio::{MockRadio, Radio};
pub use crate::secrets::{Secrets, parse_password};
pub use crate::session::{ReadSummary, Session, SessionBuilder, SessionConfig, WriteSummary};
pub use crate::variant::{Variant, VariantId, classify};
pub use crate::{Atqa, Error, Pack, PageData, Password, Result, Target, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex, poll_interval};
