// libmful/src/radio/traits.rs

use crate::constants::BLOCK_SIZE;
use crate::types::Target;
use crate::{Error, Result};

/// Radio trait abstracts the contactless transceiver away from session logic.
///
/// Implementations drive real hardware; the crate itself only ships
/// `MockRadio`. The contract mirrors what the session needs: passive-target
/// selection, the CRC/framing toggles that raw mode flips, bit- and
/// byte-granular transceive, and the two fixed 14443A memory commands
/// (block read, compatibility page write).
pub trait Radio {
    /// Select a passive ISO14443A target, optionally matching a UID prefix.
    /// Returns the selected target's UID/ATQA/SAK.
    fn select_target(&mut self, uid_filter: Option<&[u8]>) -> Result<Target>;

    /// Toggle automatic CRC handling on the transceiver.
    fn set_crc(&mut self, enabled: bool) -> Result<()>;

    /// Toggle standard ISO14443A framing on the transceiver.
    fn set_framing(&mut self, enabled: bool) -> Result<()>;

    /// Transceive a bit-granular frame; `bit_count` is the number of valid
    /// bits in `tx`. Used only for short frames such as the 7-bit unlock.
    fn transceive_bits(&mut self, tx: &[u8], bit_count: usize) -> Result<Vec<u8>>;

    /// Transceive a byte-granular frame. In raw mode the caller has already
    /// appended CRC_A. Implementations must be able to return responses up
    /// to [`crate::constants::MAX_FRAME_LEN`] bytes.
    fn transceive_bytes(&mut self, tx: &[u8]) -> Result<Vec<u8>>;

    /// Read one 16-byte block (4 pages) starting at `page`.
    fn read_block(&mut self, page: u32) -> Result<[u8; BLOCK_SIZE]>;

    /// Write one page via the 16-byte compatibility frame; the tag honors
    /// only the first 4 bytes.
    fn write_page(&mut self, page: u32, frame: &[u8; BLOCK_SIZE]) -> Result<()>;

    /// Enumerate passive targets currently in the field. Default
    /// implementation reports the operation as unsupported; radios with a
    /// native listing primitive override this.
    fn list_targets(&mut self, _max_targets: usize) -> Result<Vec<Target>> {
        Err(Error::Unsupported(
            "target enumeration not supported by this radio".into(),
        ))
    }
}
