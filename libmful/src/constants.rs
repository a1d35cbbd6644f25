// libmful/src/constants.rs
//! Common protocol and geometry constants used across the crate

/// A page is the smallest addressable unit of Ultralight/NTAG memory.
pub const PAGE_SIZE: usize = 4;

/// A block read returns 4 pages in one transaction.
pub const PAGES_PER_BLOCK: usize = 4;

/// Bytes returned by one block read.
pub const BLOCK_SIZE: usize = PAGE_SIZE * PAGES_PER_BLOCK;

/// Page count of the largest supported tag (NTAG216). The dump buffer is
/// always allocated at this capacity.
pub const MAX_PAGES: usize = 231;

/// Default page count assumed for a plain Ultralight tag that answers no
/// version query.
pub const DEFAULT_PLAIN_PAGES: u32 = 16;

/// ATQA byte 1 value shared by every Ultralight-class tag.
pub const ATQA_ULTRALIGHT: u8 = 0x44;

/// Maximum UID length for ISO14443A targets.
pub const MAX_UID_LEN: usize = 10;

/// Upper bound on a single transceive response.
pub const MAX_FRAME_LEN: usize = 264;
