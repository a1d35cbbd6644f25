//! Dump a tag end to end against the mock radio.
//!
//! Run with `RUST_LOG=debug cargo run --example dump_tag` to watch the
//! session's progress output. Swap `MockRadio` for a real `Radio`
//! implementation to drive actual hardware.

use libmful::prelude::*;
use libmful::test_support::version_response;

fn main() -> Result<()> {
    env_logger::init();

    // An NTAG213 with a recognizable pattern in its user pages.
    let mut radio = MockRadio::with_tag(&[0x04, 0x1f, 0x9a, 0x42, 0xb3, 0x5c, 0x80], 45);
    radio.push_response(version_response(0x0f));
    for page in 4..45 {
        radio.seed_pages(page, &[page as u8; 4]);
    }

    let mut session = SessionBuilder::new(Box::new(radio)).build();

    let target = session.connect()?;
    println!("tag UID: {}", target.uid.to_hex());

    let variant = session.probe()?;
    println!("variant: {} ({} pages)", variant.id, variant.page_count);

    let summary = session.read_tag()?;
    println!(
        "{} of {} pages read ({} failed)",
        summary.read_pages, variant.page_count, summary.failed_pages
    );

    for (page, chunk) in session.dump().chunks(4).enumerate() {
        println!("page {:3}: {}", page, bytes_to_hex_spaced(chunk));
    }
    Ok(())
}
