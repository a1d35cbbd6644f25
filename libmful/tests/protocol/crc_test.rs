use libmful::protocol::{append_crc_a, crc_a};
use proptest::prelude::*;

#[test]
fn crc_a_known_vectors() {
    // HLTA and GET_VERSION checksums as they appear on the wire.
    assert_eq!(crc_a(&[0x50, 0x00]), 0xcd57);
    assert_eq!(crc_a(&[0x60]), 0x32f8);
    assert_eq!(crc_a(&[]), 0x6363);
}

#[test]
fn append_is_little_endian() {
    let mut frame = vec![0x50, 0x00];
    append_crc_a(&mut frame);
    assert_eq!(frame, vec![0x50, 0x00, 0x57, 0xcd]);
}

proptest! {
    #[test]
    fn appended_crc_matches_recomputation(payload in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut frame = payload.clone();
        append_crc_a(&mut frame);
        prop_assert_eq!(frame.len(), payload.len() + 2);
        let crc = crc_a(&payload);
        prop_assert_eq!(frame[payload.len()], (crc & 0xff) as u8);
        prop_assert_eq!(frame[payload.len() + 1], (crc >> 8) as u8);
    }
}
