//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockRadio setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::BLOCK_SIZE;
use crate::radio::{MockRadio, Radio};
use crate::session::Session;
use crate::Result;
use crate::types::Target;

/// Radio wrapper that delegates into a shared MockRadio, so tests can keep
/// inspecting the mock after a Session has taken ownership of the handle.
pub struct SharedRadio {
    inner: Rc<RefCell<MockRadio>>,
}

impl SharedRadio {
    pub fn new(inner: Rc<RefCell<MockRadio>>) -> Self {
        Self { inner }
    }
}

impl Radio for SharedRadio {
    fn select_target(&mut self, uid_filter: Option<&[u8]>) -> Result<Target> {
        self.inner.borrow_mut().select_target(uid_filter)
    }

    fn set_crc(&mut self, enabled: bool) -> Result<()> {
        self.inner.borrow_mut().set_crc(enabled)
    }

    fn set_framing(&mut self, enabled: bool) -> Result<()> {
        self.inner.borrow_mut().set_framing(enabled)
    }

    fn transceive_bits(&mut self, tx: &[u8], bit_count: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive_bits(tx, bit_count)
    }

    fn transceive_bytes(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive_bytes(tx)
    }

    fn read_block(&mut self, page: u32) -> Result<[u8; BLOCK_SIZE]> {
        self.inner.borrow_mut().read_block(page)
    }

    fn write_page(&mut self, page: u32, frame: &[u8; BLOCK_SIZE]) -> Result<()> {
        self.inner.borrow_mut().write_page(page, frame)
    }

    fn list_targets(&mut self, max_targets: usize) -> Result<Vec<Target>> {
        self.inner.borrow_mut().list_targets(max_targets)
    }
}

/// Wrap a MockRadio in a Session while keeping a shared handle to the mock.
#[doc(hidden)]
pub fn shared_session(mock: MockRadio) -> (Session, Rc<RefCell<MockRadio>>) {
    let shared = Rc::new(RefCell::new(mock));
    let session = Session::new(Box::new(SharedRadio::new(shared.clone())));
    (session, shared)
}

/// A mock with an EV1/NTAG tag in the field, pre-seeded to answer one
/// version query with the given version byte.
#[doc(hidden)]
pub fn mock_with_version(version_byte: u8, page_count: u32) -> MockRadio {
    let mut mock = MockRadio::with_tag(&[], page_count);
    mock.push_response(version_response(version_byte));
    mock
}

/// A well-formed 8-byte GET_VERSION response with the product byte at
/// index 6.
#[doc(hidden)]
pub fn version_response(version_byte: u8) -> Vec<u8> {
    vec![0x00, 0x04, 0x03, 0x01, 0x01, 0x00, version_byte, 0x03]
}

/// Queue an auth response so the next PWD_AUTH transceive yields this PACK.
#[doc(hidden)]
pub fn seed_pack(mock: &mut MockRadio, pack: [u8; 2]) {
    mock.push_response(pack.to_vec());
}

/// Fill the mock tag's user pages with a recognizable pattern.
#[doc(hidden)]
pub fn seed_pattern(mock: &mut MockRadio, page_count: u32) {
    for page in 4..page_count {
        let b = page as u8;
        mock.seed_pages(page, &[b, b.wrapping_add(1), b.wrapping_add(2), b.wrapping_add(3)]);
    }
}
