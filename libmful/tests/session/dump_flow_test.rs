use libmful::prelude::*;
use libmful::test_support::{seed_pack, shared_session};

use crate::common::fixtures;

#[test]
fn ul11_dump_with_secrets() {
    fixtures::init_logging();

    let mut mock = fixtures::ul11_mock();
    seed_pack(&mut mock, [0xee, 0xff]);
    let (mut session, _mock) = shared_session(mock);

    session.connect().unwrap();
    let variant = session.probe().unwrap();
    assert_eq!(variant.id, VariantId::Ul11);
    assert_eq!(variant.page_count, 20);

    let password = parse_password("AABBCCDD").unwrap();
    session.authenticate(password).unwrap();

    let summary = session.read_tag().unwrap();
    assert!(summary.is_complete());
    assert_eq!(summary.read_pages, 20);

    // 20 pages of 4 bytes, raw page order, no header.
    let dump = session.dump();
    assert_eq!(dump.len(), 80);

    // The supplied password and the returned PACK land at the variant's
    // configuration pages.
    assert_eq!(&dump[16..20], &[0xaa, 0xbb, 0xcc, 0xdd]);
    assert_eq!(&dump[20..22], &[0xee, 0xff]);
}

#[test]
fn dump_starts_with_uid_bytes() {
    let (mut session, _mock) = shared_session(fixtures::ul11_mock());
    session.connect().unwrap();
    session.probe().unwrap();
    session.read_tag().unwrap();

    let uid = fixtures::sample_uid();
    let dump = session.dump();
    // Page 0: uid0-2 + check byte; page 1: uid3-6.
    assert_eq!(&dump[0..3], &uid[0..3]);
    assert_eq!(&dump[4..8], &uid[3..7]);
}

#[test]
fn ntag216_dump_covers_all_pages() {
    let (mut session, mock) = shared_session(fixtures::ntag216_mock());
    session.connect().unwrap();
    let variant = session.probe().unwrap();
    assert_eq!(variant.id, VariantId::Ntag216);

    let summary = session.read_tag().unwrap();
    assert_eq!(summary.read_pages, 231);
    assert_eq!(session.dump().len(), 924);
    assert_eq!(session.dump(), &mock.borrow().memory[..]);
}

#[test]
fn partial_read_still_yields_dump() {
    let mut mock = fixtures::ntag213_mock();
    mock.fail_reads.insert(12);
    mock.fail_reads.insert(44); // final stride: one page on a 45-page tag
    let (mut session, _mock) = shared_session(mock);

    session.connect().unwrap();
    session.probe().unwrap();
    let summary = session.read_tag().unwrap();

    assert_eq!(summary.failed_pages, 5);
    assert_eq!(summary.read_pages, 40);
    assert_eq!(session.dump().len(), 180);
    // Failed strides stay zeroed from the session reset.
    assert_eq!(&session.dump()[48..64], &[0u8; 16]);
}

#[test]
fn plain_tag_uses_default_page_count() {
    // No version response queued: the tag is treated as plain Ultralight.
    let mock = MockRadio::with_tag(&fixtures::sample_uid(), 16);
    let (mut session, _mock) = shared_session(mock);

    session.connect().unwrap();
    let variant = session.probe().unwrap();
    assert_eq!(variant.id, VariantId::Plain);
    assert_eq!(variant.page_count, 16);

    session.read_tag().unwrap();
    assert_eq!(session.dump().len(), 64);
}
