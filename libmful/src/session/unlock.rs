// libmful/src/session/unlock.rs

//! Clone-tag unlock.
//!
//! UID-rewritable clones come in two kinds: tags that simply accept writes
//! to pages 0-2, and tags that expose a vendor backdoor. The backdoor needs
//! a halt first to reset the tag's protocol state machine, then a 7-bit
//! `0x40` frame followed by a 1-byte `0x43` frame. The halt itself never
//! answers cleanly and its outcome is ignored.

use log::debug;

use crate::Result;
use crate::constants::{BLOCK_SIZE, PAGE_SIZE};
use crate::protocol::commands::{UNLOCK_STEP1, UNLOCK_STEP1_BITS, UNLOCK_STEP2, halt};

use super::Session;

impl Session {
    /// Probe whether the tag accepts UID writes, unlocking it if needed.
    ///
    /// Returns `Ok(false)` when the tag refuses both the direct rewrite and
    /// the backdoor sequence; configuration errors propagate.
    pub fn detect_and_unlock(&mut self) -> Result<bool> {
        debug!("checking whether tag accepts direct UID writes");
        if self.direct_write_probe() {
            debug!("tag accepts direct writes to pages 0-2");
            return Ok(true);
        }
        debug!("tag refused direct writes, trying backdoor unlock");
        self.backdoor_unlock()
    }

    /// Read pages 0-2 and write the same bytes straight back. A tag that
    /// accepts all three self-writes needs no unlock sequence.
    fn direct_write_probe(&mut self) -> bool {
        let block = match self.radio_mut().read_block(0) {
            Ok(block) => block,
            Err(err) => {
                debug!("unable to read pages 0-2: {}", err);
                return false;
            }
        };

        for page in 0..3u32 {
            let offset = page as usize * PAGE_SIZE;
            let mut frame = [0u8; BLOCK_SIZE];
            frame[..PAGE_SIZE].copy_from_slice(&block[offset..offset + PAGE_SIZE]);
            if let Err(err) = self.radio_mut().write_page(page, &frame) {
                debug!("page {} rewrite refused: {}", page, err);
                return false;
            }
        }
        true
    }

    /// Halt, then the two-step unlock. Success requires both unlock frames
    /// to transmit; the halt response is ignored by design of the tags.
    fn backdoor_unlock(&mut self) -> Result<bool> {
        self.with_raw(|s| {
            let halt_frame = halt();
            let _ = s.send_bytes(&halt_frame);

            if s.send_bits(&[UNLOCK_STEP1], UNLOCK_STEP1_BITS).is_err() {
                debug!("7-bit unlock frame refused");
                return Ok(false);
            }
            if s.send_bytes(&[UNLOCK_STEP2]).is_err() {
                debug!("unlock confirmation frame refused");
                return Ok(false);
            }
            Ok(true)
        })
    }
}
