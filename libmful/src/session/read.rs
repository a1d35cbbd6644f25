// libmful/src/session/read.rs

//! Bulk read: tag memory into the dump image.
//!
//! One block read covers 4 pages, so the tag is walked in strides of 4 from
//! page 0. A stride that fails is counted and left as zeros in the image;
//! the read keeps going, because an incomplete dump is still useful to the
//! caller. Secrets are overlaid only after the last stride, so they are
//! recorded from what the caller supplied rather than read back.

use log::{debug, warn};

use crate::Result;
use crate::constants::PAGES_PER_BLOCK;
use crate::secrets;

use super::Session;

/// Page counters for one bulk read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    pub read_pages: u32,
    pub failed_pages: u32,
}

impl ReadSummary {
    /// True when every stride succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed_pages == 0
    }
}

impl Session {
    /// Read all pages of the active variant into the dump image.
    ///
    /// Per-stride failures are advisory: they are counted, the affected
    /// pages stay zeroed, and the read completes. The summary tells the
    /// caller how much of the dump is real.
    pub fn read_tag(&mut self) -> Result<ReadSummary> {
        let page_count = self.variant().page_count;
        self.image_mut().reset();

        let mut summary = ReadSummary::default();
        debug!("reading {} pages", page_count);

        let mut page = 0;
        while page < page_count {
            let stride_pages = (page_count - page).min(PAGES_PER_BLOCK as u32);
            match self.radio_mut().read_block(page) {
                Ok(block) => {
                    self.image_mut().fill_block(page, &block, page_count);
                    summary.read_pages += stride_pages;
                }
                Err(err) => {
                    warn!("block read failed at page {}: {}", page, err);
                    summary.failed_pages += stride_pages;
                }
            }
            page += PAGES_PER_BLOCK as u32;
        }

        debug!(
            "done, {} of {} pages read ({} pages failed)",
            summary.read_pages, page_count, summary.failed_pages
        );

        if let Some(secrets) = self.secrets().copied() {
            let variant = self.variant();
            secrets::overlay(self.image_mut(), &variant, &secrets);
        }

        Ok(summary)
    }
}
