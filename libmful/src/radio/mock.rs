// libmful/src/radio/mock.rs

use std::collections::{HashSet, VecDeque};

use crate::constants::{BLOCK_SIZE, MAX_UID_LEN, PAGE_SIZE};
use crate::radio::traits::Radio;
use crate::types::{Atqa, Target, Uid};
use crate::{Error, Result};

const DEFAULT_UID: [u8; 7] = [0x04, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];

/// Mock radio for unit tests. It simulates a page-addressed tag memory,
/// records every frame and property toggle, and lets tests script failures
/// per page or per transceive call.
#[derive(Debug, Default)]
pub struct MockRadio {
    /// Backing tag memory, page-addressed. Reads beyond the end yield zeros.
    pub memory: Vec<u8>,
    /// Target returned by `select_target`; `None` means no tag in the field.
    pub target: Option<Target>,
    /// Number of selection attempts that miss before the target appears
    /// (drives wait-for-tag tests).
    pub select_misses: usize,
    /// Total selection attempts observed.
    pub select_count: usize,
    /// Stride start pages whose block read fails.
    pub fail_reads: HashSet<u32>,
    /// Pages whose write fails.
    pub fail_writes: HashSet<u32>,
    /// Every page write observed: (page, compatibility frame).
    pub write_log: Vec<(u32, [u8; BLOCK_SIZE])>,
    /// Every bit-granular frame observed: (bytes, bit count).
    pub bit_frames: Vec<(Vec<u8>, usize)>,
    /// Every byte-granular frame observed.
    pub byte_frames: Vec<Vec<u8>>,
    /// Queued responses for transceive calls, oldest first.
    pub responses: VecDeque<Vec<u8>>,
    /// Number of subsequent transceive calls that should fail.
    pub transceive_failures: usize,
    /// Number of subsequent property toggles that should fail.
    pub config_failures: usize,
    /// Current CRC toggle state.
    pub crc_enabled: bool,
    /// Current framing toggle state.
    pub framing_enabled: bool,
    /// Log of property toggles: (property name, value).
    pub config_log: Vec<(&'static str, bool)>,
}

impl MockRadio {
    /// An empty field: selection fails until a target is installed.
    pub fn new() -> Self {
        Self {
            crc_enabled: true,
            framing_enabled: true,
            ..Default::default()
        }
    }

    /// A mock with an Ultralight-class tag in the field. The UID lands in
    /// pages 0-1 with its check bytes, the way the tag itself serializes it.
    pub fn with_tag(uid: &[u8], page_count: u32) -> Self {
        let uid_bytes: &[u8] = if uid.is_empty() { &DEFAULT_UID } else { uid };
        let uid_bytes = &uid_bytes[..uid_bytes.len().min(MAX_UID_LEN)];
        let uid = Uid::from_bytes(uid_bytes).expect("clamped uid length is valid");

        let mut mock = Self::new();
        mock.memory = vec![0u8; page_count as usize * PAGE_SIZE];
        mock.install_uid(&uid);
        mock.target = Some(Target::new(uid, Atqa::from_bytes([0x00, 0x44]), 0x00));
        mock
    }

    fn install_uid(&mut self, uid: &Uid) {
        let u = uid.as_bytes();
        if u.len() < 7 || self.memory.len() < 9 {
            return;
        }
        // Page 0: uid0-2 + BCC0, page 1: uid3-6, page 2 byte 0: BCC1.
        self.memory[0] = u[0];
        self.memory[1] = u[1];
        self.memory[2] = u[2];
        self.memory[3] = 0x88 ^ u[0] ^ u[1] ^ u[2];
        self.memory[4..8].copy_from_slice(&u[3..7]);
        self.memory[8] = u[3] ^ u[4] ^ u[5] ^ u[6];
    }

    /// Overwrite tag memory starting at `page`.
    pub fn seed_pages(&mut self, page: u32, data: &[u8]) {
        let off = page as usize * PAGE_SIZE;
        self.memory[off..off + data.len()].copy_from_slice(data);
    }

    /// Queue a response for the next transceive call.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Script the next `n` transceive calls to fail.
    pub fn set_transceive_failures(&mut self, n: usize) {
        self.transceive_failures = n;
    }

    /// Script the next `n` property toggles to fail.
    pub fn set_config_failures(&mut self, n: usize) {
        self.config_failures = n;
    }

    fn next_response(&mut self) -> Result<Vec<u8>> {
        if self.transceive_failures > 0 {
            self.transceive_failures -= 1;
            return Err(Error::Transceive("scripted failure".into()));
        }
        self.responses
            .pop_front()
            .ok_or_else(|| Error::Transceive("no queued response".into()))
    }
}

impl Radio for MockRadio {
    fn select_target(&mut self, uid_filter: Option<&[u8]>) -> Result<Target> {
        self.select_count += 1;
        if self.select_misses > 0 {
            self.select_misses -= 1;
            return Err(Error::NoTag);
        }
        let target = self.target.ok_or(Error::NoTag)?;
        if let Some(filter) = uid_filter {
            if !target.uid.as_bytes().starts_with(filter) {
                return Err(Error::NoTag);
            }
        }
        Ok(target)
    }

    fn set_crc(&mut self, enabled: bool) -> Result<()> {
        if self.config_failures > 0 {
            self.config_failures -= 1;
            return Err(Error::DeviceConfig("crc toggle".into()));
        }
        self.crc_enabled = enabled;
        self.config_log.push(("crc", enabled));
        Ok(())
    }

    fn set_framing(&mut self, enabled: bool) -> Result<()> {
        if self.config_failures > 0 {
            self.config_failures -= 1;
            return Err(Error::DeviceConfig("framing toggle".into()));
        }
        self.framing_enabled = enabled;
        self.config_log.push(("framing", enabled));
        Ok(())
    }

    fn transceive_bits(&mut self, tx: &[u8], bit_count: usize) -> Result<Vec<u8>> {
        self.bit_frames.push((tx.to_vec(), bit_count));
        self.next_response()
    }

    fn transceive_bytes(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        self.byte_frames.push(tx.to_vec());
        self.next_response()
    }

    fn read_block(&mut self, page: u32) -> Result<[u8; BLOCK_SIZE]> {
        if self.fail_reads.contains(&page) {
            return Err(Error::Transceive(format!("read failed at page {}", page)));
        }
        let mut block = [0u8; BLOCK_SIZE];
        let off = page as usize * PAGE_SIZE;
        for (i, b) in block.iter_mut().enumerate() {
            *b = self.memory.get(off + i).copied().unwrap_or(0);
        }
        Ok(block)
    }

    fn write_page(&mut self, page: u32, frame: &[u8; BLOCK_SIZE]) -> Result<()> {
        self.write_log.push((page, *frame));
        if self.fail_writes.contains(&page) {
            return Err(Error::Transceive(format!("write failed at page {}", page)));
        }
        let off = page as usize * PAGE_SIZE;
        if off + PAGE_SIZE <= self.memory.len() {
            // Compatibility frame: the tag honors only the first 4 bytes.
            self.memory[off..off + PAGE_SIZE].copy_from_slice(&frame[..PAGE_SIZE]);
        }
        Ok(())
    }

    fn list_targets(&mut self, max_targets: usize) -> Result<Vec<Target>> {
        Ok(self.target.into_iter().take(max_targets).collect())
    }
}
