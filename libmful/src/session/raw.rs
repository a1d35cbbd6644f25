// libmful/src/session/raw.rs

//! Raw-mode adapter.
//!
//! The version query, password auth and clone unlock commands are
//! non-standard extensions that the transceiver's normal framing layer would
//! corrupt, so they travel with CRC appending and ISO14443A framing disabled.
//! The two toggles must be restored symmetrically: even when a raw-mode body
//! fails, leaving the transceiver half-configured is not an option.

use log::trace;

use crate::Result;
use crate::session::Session;

impl Session {
    /// Disable automatic CRC and framing.
    pub(crate) fn enter_raw(&mut self) -> Result<()> {
        trace!("entering raw mode");
        self.radio_mut().set_crc(false)?;
        self.radio_mut().set_framing(false)?;
        Ok(())
    }

    /// Re-enable automatic CRC and framing.
    pub(crate) fn exit_raw(&mut self) -> Result<()> {
        trace!("leaving raw mode");
        self.radio_mut().set_crc(true)?;
        self.radio_mut().set_framing(true)?;
        Ok(())
    }

    /// Run `body` in raw mode, always attempting to restore normal mode
    /// afterwards. A configuration failure on entry still triggers a restore
    /// attempt so the transceiver is never left partially configured.
    pub(crate) fn with_raw<T>(
        &mut self,
        body: impl FnOnce(&mut Session) -> Result<T>,
    ) -> Result<T> {
        if let Err(err) = self.enter_raw() {
            let _ = self.exit_raw();
            return Err(err);
        }

        let outcome = body(self);
        let restored = self.exit_raw();

        let value = outcome?;
        restored?;
        Ok(value)
    }

    /// Transceive a bit-granular frame (used for the 7-bit unlock step).
    pub(crate) fn send_bits(&mut self, tx: &[u8], bit_count: usize) -> Result<Vec<u8>> {
        trace!("tx {} bits: {}", bit_count, crate::utils::bytes_to_hex(tx));
        self.radio_mut().transceive_bits(tx, bit_count)
    }

    /// Transceive a byte-granular frame. In raw mode the frame must already
    /// carry its CRC_A.
    pub(crate) fn send_bytes(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        trace!("tx: {}", crate::utils::bytes_to_hex(tx));
        self.radio_mut().transceive_bytes(tx)
    }
}
