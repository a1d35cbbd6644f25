// libmful/src/session/probe.rs

//! Version probe.
//!
//! EV1 and NTAG tags answer the GET_VERSION query; byte 6 of the answer
//! selects the variant. Plain Ultralight tags stay silent, and the failed
//! raw-mode transaction leaves them needing a fresh anti-collision pass
//! before any further command.

use log::{debug, warn};

use crate::protocol::commands::version_query;
use crate::variant::{self, Variant};
use crate::{Error, Result};

use super::Session;

impl Session {
    /// Identify the tag in the field.
    ///
    /// Stores and returns the variant. When the tag answers no version
    /// query it is treated as a plain Ultralight with the configured
    /// default page count, and the target is re-selected on the spot.
    pub fn probe(&mut self) -> Result<Variant> {
        let frame = version_query();
        let response = match self.with_raw(|s| s.send_bytes(&frame)) {
            Ok(response) => response,
            Err(err @ Error::DeviceConfig(_)) => return Err(err),
            Err(_) => Vec::new(),
        };

        if response.is_empty() {
            debug!("no version response, assuming plain Ultralight");
            let plain = Variant::plain(self.default_page_count());
            self.store_variant(plain);
            // The unanswered raw frame left the tag mid-transaction.
            self.reselect().map_err(|_| Error::NoTag)?;
            return Ok(plain);
        }

        let version_byte = match response.get(6) {
            Some(&byte) => byte,
            None => {
                warn!("version response too short: {} bytes", response.len());
                return Err(Error::InvalidLength {
                    expected: 7,
                    actual: response.len(),
                });
            }
        };

        let detected = variant::classify(version_byte)?;
        debug!(
            "tag identified as {} ({} pages)",
            detected.id, detected.page_count
        );
        if detected.password_page.is_some() {
            debug!("tag supports password protection, auth may be required");
        }
        self.store_variant(detected);
        Ok(detected)
    }
}
