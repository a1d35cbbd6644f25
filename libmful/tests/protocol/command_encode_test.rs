use libmful::protocol::commands::{halt, password_auth, version_query};
use libmful::secrets::parse_password;

#[test]
fn version_query_wire_format() {
    assert_eq!(version_query(), vec![0x60, 0xf8, 0x32]);
}

#[test]
fn halt_wire_format() {
    assert_eq!(halt(), vec![0x50, 0x00, 0x57, 0xcd]);
}

#[test]
fn password_auth_wire_format() -> anyhow::Result<()> {
    let password = parse_password("1a2B3c4D").map_err(anyhow::Error::from)?;
    let frame = password_auth(&password);

    assert_eq!(frame.len(), 7);
    assert_eq!(frame[0], 0x1b);
    assert_eq!(hex::encode(&frame[1..5]), "1a2b3c4d");
    assert_eq!(
        libmful::protocol::crc_a(&frame[..5]),
        u16::from_le_bytes([frame[5], frame[6]])
    );
    Ok(())
}
