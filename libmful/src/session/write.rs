// libmful/src/session/write.rs

//! Page-wise write-back: dump image onto the tag.
//!
//! Each page is written through the 16-byte compatibility frame, of which
//! the tag honors only the first 4 bytes. A failed write leaves the tag's
//! protocol state machine misaligned, so the target must be re-selected
//! before the next write; losing the tag at that point aborts the session.
//! Individual page failures are otherwise advisory, like read failures.

use log::{debug, trace, warn};

use crate::constants::{BLOCK_SIZE, PAGE_SIZE};
use crate::plan::{PageAction, WritePlan};
use crate::{Error, Result};

use super::Session;

/// Page counters for one write-back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written_pages: u32,
    pub skipped_pages: u32,
    pub failed_pages: u32,
}

impl Session {
    /// Write the dump image back to the tag according to `plan`.
    ///
    /// When the plan includes the UID pages, the tag must first pass the
    /// unlock check; refusal fails the whole operation before any page is
    /// touched. Returns [`Error::TagLost`] if the tag cannot be re-selected
    /// after a failed write.
    pub fn write_tag(&mut self, plan: &WritePlan) -> Result<WriteSummary> {
        if plan.rewrites_uid() && !self.detect_and_unlock()? {
            return Err(Error::MagicUnlockFailed);
        }

        let page_count = self.variant().page_count;
        let mut summary = WriteSummary::default();
        let mut previous_failed = false;
        debug!("writing {} pages", page_count);

        for page in 0..page_count {
            if plan.action(page) == PageAction::Skip {
                trace!("page {} skipped", page);
                summary.skipped_pages += 1;
                continue;
            }

            if previous_failed {
                // Redo anti-collision before trusting the tag again.
                self.reselect().map_err(|_| Error::TagLost)?;
                previous_failed = false;
            }

            let mut frame = [0u8; BLOCK_SIZE];
            frame[..PAGE_SIZE].copy_from_slice(self.image().page(page).as_bytes());

            match self.radio_mut().write_page(page, &frame) {
                Ok(()) => summary.written_pages += 1,
                Err(err) => {
                    warn!("page {} write failed: {}", page, err);
                    summary.failed_pages += 1;
                    previous_failed = true;
                }
            }
        }

        debug!(
            "done, {} of {} pages written ({} skipped, {} failed)",
            summary.written_pages, page_count, summary.skipped_pages, summary.failed_pages
        );
        Ok(summary)
    }
}
