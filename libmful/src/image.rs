// libmful/src/image.rs

//! In-memory mirror of a tag's page-addressed memory.
//!
//! The buffer is always allocated at the capacity of the largest supported
//! variant (NTAG216); only the first `page_count` pages of the active variant
//! are meaningful. Pages 0-3 carry UID/lock/OTP bytes whose positions are
//! fixed by the 14443A Ultralight memory map.

use crate::constants::{BLOCK_SIZE, MAX_PAGES, PAGE_SIZE, PAGES_PER_BLOCK};
use crate::types::PageData;
use crate::{Error, Result};

/// Flat page buffer sized to the largest supported tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpImage {
    buf: [u8; MAX_PAGES * PAGE_SIZE],
}

impl Default for DumpImage {
    fn default() -> Self {
        Self::new()
    }
}

impl DumpImage {
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_PAGES * PAGE_SIZE],
        }
    }

    /// Zero-fill the whole buffer. Runs at the start of each session.
    pub fn reset(&mut self) {
        self.buf.fill(0);
    }

    /// The 4 bytes of one page.
    pub fn page(&self, page: u32) -> PageData {
        let off = page as usize * PAGE_SIZE;
        let mut bytes = [0u8; PAGE_SIZE];
        bytes.copy_from_slice(&self.buf[off..off + PAGE_SIZE]);
        PageData::from_bytes(bytes)
    }

    /// Overwrite one page.
    pub fn set_page(&mut self, page: u32, data: PageData) {
        let off = page as usize * PAGE_SIZE;
        self.buf[off..off + PAGE_SIZE].copy_from_slice(data.as_bytes());
    }

    /// Copy a block-read result into the image at the slot belonging to
    /// `page`. Copies `min(4, page_count - page) * 4` bytes; the destination
    /// offset is always the full slot offset `page * 4`, matching the tag's
    /// own address arithmetic for short final strides.
    pub fn fill_block(&mut self, page: u32, block: &[u8; BLOCK_SIZE], page_count: u32) {
        let remaining = (page_count - page) as usize;
        let len = remaining.min(PAGES_PER_BLOCK) * PAGE_SIZE;
        let off = page as usize * PAGE_SIZE;
        self.buf[off..off + len].copy_from_slice(&block[..len]);
    }

    /// Raw bytes of the full buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The meaningful prefix for a tag with `page_count` pages.
    pub fn dump(&self, page_count: u32) -> &[u8] {
        &self.buf[..page_count as usize * PAGE_SIZE]
    }

    /// Load a previously persisted dump. The source must be exactly the
    /// active variant's dump size; the rest of the buffer is zeroed.
    pub fn load(&mut self, data: &[u8], page_count: u32) -> Result<()> {
        let expected = page_count as usize * PAGE_SIZE;
        if data.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: data.len(),
            });
        }
        self.reset();
        self.buf[..expected].copy_from_slice(data);
        Ok(())
    }
}
