use libmful::prelude::*;
use libmful::test_support::shared_session;

use crate::common::fixtures;

#[test]
fn roundtrip_restore_writes_every_page() {
    fixtures::init_logging();

    let (mut session, mock) = shared_session(fixtures::ul11_mock());
    session.connect().unwrap();
    let variant = session.probe().unwrap();
    session.read_tag().unwrap();

    let dump = session.dump().to_vec();
    mock.borrow_mut().write_log.clear();

    let plan = WritePlan::new(WriteFlags::all(), &variant);
    let summary = session.write_tag(&plan).unwrap();

    assert_eq!(summary.written_pages, 20);
    assert_eq!(summary.skipped_pages, 0);
    assert_eq!(summary.failed_pages, 0);

    let mock = mock.borrow();
    // Skip the unlock probe's three self-writes; then each page write
    // carries exactly its 4 dump bytes plus compatibility padding.
    let writes = &mock.write_log[3..];
    assert_eq!(writes.len(), 20);
    for (page, frame) in writes {
        let offset = *page as usize * 4;
        assert_eq!(&frame[..4], &dump[offset..offset + 4]);
        assert_eq!(&frame[4..], &[0u8; 12]);
    }
    // The tag's memory now mirrors the dump again.
    assert_eq!(&mock.memory[..], &dump[..]);
}

#[test]
fn ntag213_skip_policy_scenario() {
    let (mut session, mock) = shared_session(fixtures::ntag213_mock());
    session.connect().unwrap();
    let variant = session.probe().unwrap();
    session.read_tag().unwrap();

    let flags = WriteFlags {
        otp: false,
        lock: true,
        dynamic_lock: true,
        uid: false,
    };
    let summary = session.write_tag(&WritePlan::new(flags, &variant)).unwrap();

    assert_eq!(summary.written_pages, 42);
    assert_eq!(summary.skipped_pages, 3);
    assert_eq!(summary.failed_pages, 0);

    let pages: Vec<u32> = mock.borrow().write_log.iter().map(|(p, _)| *p).collect();
    assert!(!pages.contains(&0));
    assert!(!pages.contains(&1));
    assert!(pages.contains(&2));
    assert!(!pages.contains(&3));
    assert!(pages.contains(&0x28));
}

#[test]
fn restore_from_loaded_dump() -> anyhow::Result<()> {
    // Restore path: the dump bytes come from a previous session and the
    // variant is supplied out-of-band.
    let (mut session, mock) = shared_session(fixtures::ntag213_mock());
    session.connect()?;
    let variant = session.probe()?;

    let saved: Vec<u8> = (0..variant.dump_size()).map(|i| i as u8).collect();
    session.load_dump(&saved)?;
    assert_eq!(session.dump(), &saved[..]);

    let flags = WriteFlags {
        otp: true,
        lock: true,
        dynamic_lock: true,
        uid: false,
    };
    let summary = session.write_tag(&WritePlan::new(flags, &variant))?;
    assert_eq!(summary.written_pages, 43);

    // Pages 2 onward now carry the loaded dump bytes.
    let mock = mock.borrow();
    assert_eq!(&mock.memory[8..], &saved[8..]);
    Ok(())
}

#[test]
fn load_dump_rejects_wrong_size() {
    let (mut session, _mock) = shared_session(fixtures::ntag213_mock());
    session.connect().unwrap();
    session.probe().unwrap();

    match session.load_dump(&[0u8; 80]) {
        Err(Error::InvalidLength {
            expected: 180,
            actual: 80,
        }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

#[test]
fn uid_rewrite_on_direct_write_clone() {
    let (mut session, mock) = shared_session(fixtures::ul11_mock());
    session.connect().unwrap();
    let variant = session.probe().unwrap();
    session.read_tag().unwrap();

    // Forge a different UID in the dump before restoring.
    let mut forged = session.dump().to_vec();
    forged[0] = 0x08;
    session.load_dump(&forged).unwrap();

    let plan = WritePlan::new(WriteFlags::all(), &variant);
    session.write_tag(&plan).unwrap();

    // The mock accepts page 0-2 writes, so no backdoor frames were needed
    // and the forged byte reached the tag.
    let mock = mock.borrow();
    assert!(mock.bit_frames.is_empty());
    assert_eq!(mock.memory[0], 0x08);
}

#[test]
fn uid_rewrite_uses_backdoor_on_locked_clone() {
    let mut mock = fixtures::ul11_mock();
    // The tag refuses direct UID writes until unlocked.
    mock.fail_writes.insert(0);
    // Backdoor answers: halt (ignored), 7-bit ack, confirmation ack.
    mock.push_response(Vec::new());
    mock.push_response(vec![0x0a]);
    mock.push_response(vec![0x0a]);
    let (mut session, mock) = shared_session(mock);

    session.connect().unwrap();
    let variant = session.probe().unwrap();
    session.read_tag().unwrap();

    // Unlock succeeds via the backdoor; the main loop then starts at page
    // 0, which still fails on this mock, forcing one re-selection.
    let plan = WritePlan::new(WriteFlags::all(), &variant);
    let summary = session.write_tag(&plan).unwrap();

    assert_eq!(summary.failed_pages, 1);
    assert_eq!(summary.written_pages, 19);
    let mock = mock.borrow();
    assert_eq!(mock.bit_frames, vec![(vec![0x40], 7)]);
}
