use libmful::prelude::*;
use libmful::test_support::{seed_pack, shared_session};
use proptest::prelude::*;

use crate::common::fixtures;

#[test]
fn parse_password_exact_format() {
    let password = parse_password("1a2B3c4D").unwrap();
    assert_eq!(password.as_bytes(), &[0x1a, 0x2b, 0x3c, 0x4d]);

    assert!(matches!(
        parse_password("1a2b3c"),
        Err(Error::InvalidPasswordFormat)
    ));
}

#[test]
fn auth_failure_is_surfaced_before_read() {
    // A tag that answers the version query but refuses the auth command.
    let mock = fixtures::ntag213_mock();
    let (mut session, _mock) = shared_session(mock);
    session.connect().unwrap();
    session.probe().unwrap();

    let password = parse_password("00000000").unwrap();
    assert!(matches!(
        session.authenticate(password),
        Err(Error::AuthFailed)
    ));

    // The caller may still read without secrets; no overlay happens.
    let summary = session.read_tag().unwrap();
    assert!(summary.is_complete());
    assert!(session.secrets().is_none());
}

#[test]
fn overlay_runs_once_after_read() {
    let mut mock = fixtures::ntag213_mock();
    seed_pack(&mut mock, [0xbe, 0xef]);
    let (mut session, mock) = shared_session(mock);
    session.connect().unwrap();
    session.probe().unwrap();
    session.authenticate(parse_password("cafebabe").unwrap()).unwrap();
    session.read_tag().unwrap();

    // NTAG213 keeps its password at page 43 and PACK at page 44. The tag
    // never returns the real values in a read; the overlay records what the
    // session knows, regardless of what came over the air.
    let dump = session.dump();
    assert_eq!(&dump[172..176], &[0xca, 0xfe, 0xba, 0xbe]);
    assert_eq!(&dump[176..178], &[0xbe, 0xef]);
    assert_ne!(&mock.borrow().memory[172..176], &dump[172..176]);
}

proptest! {
    #[test]
    fn parse_password_roundtrips_hex(bytes in any::<[u8; 4]>()) {
        let text = hex::encode(bytes);
        let password = parse_password(&text).unwrap();
        prop_assert_eq!(password.as_bytes(), &bytes);
        prop_assert_eq!(password.to_hex(), text);
    }

    #[test]
    fn parse_password_rejects_wrong_lengths(text in "[0-9a-fA-F]{0,12}") {
        prop_assume!(text.len() != 8);
        prop_assert!(parse_password(&text).is_err());
    }
}
