// fixtures.rs — commonly used tags and payloads for integration tests

#![allow(dead_code)]

use libmful::radio::MockRadio;
use libmful::test_support::{seed_pattern, version_response};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_uid() -> [u8; 7] {
    [0x04, 0x1f, 0x9a, 0x42, 0xb3, 0x5c, 0x80]
}

/// An MF0UL11 tag (20 pages) with patterned user memory, ready to answer
/// one version query.
pub fn ul11_mock() -> MockRadio {
    let mut mock = MockRadio::with_tag(&sample_uid(), 20);
    mock.push_response(version_response(0x0b));
    seed_pattern(&mut mock, 20);
    mock
}

/// An NTAG213 tag (45 pages) with patterned user memory.
pub fn ntag213_mock() -> MockRadio {
    let mut mock = MockRadio::with_tag(&sample_uid(), 45);
    mock.push_response(version_response(0x0f));
    seed_pattern(&mut mock, 45);
    mock
}

/// An NTAG216 tag (231 pages), the largest supported layout.
pub fn ntag216_mock() -> MockRadio {
    let mut mock = MockRadio::with_tag(&sample_uid(), 231);
    mock.push_response(version_response(0x13));
    seed_pattern(&mut mock, 231);
    mock
}
