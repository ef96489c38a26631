//! Walk the full selection and record-read flow against canned responses.
//!
//! The physical driver stays outside the crate, so this demo seeds a
//! `MockTransport` with the byte traffic a real card would produce. Run with
//! `RUST_LOG=debug` to see the APDU trace.
//!
//! Usage:
//!   cargo run -p emvtap --example read_pan

use emvtap::transport::TargetAcquisition;
use emvtap::{CardSession, MockTransport, TargetDescriptor, bytes_to_hex};

const AID: [u8; 7] = [0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10];
const PAN: [u8; 8] = [0x41, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11];

fn ppse_response() -> Vec<u8> {
    let mut resp = vec![0x6F, 0x0B, 0x61, 0x09, 0x4F, 0x07];
    resp.extend_from_slice(&AID);
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

fn application_fci() -> Vec<u8> {
    let mut resp = vec![0x6F, 0x09, 0x84, 0x07];
    resp.extend_from_slice(&AID);
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

fn record_with_pan() -> Vec<u8> {
    let mut resp = vec![0x70, 0x0A, 0x5A, 0x08];
    resp.extend_from_slice(&PAN);
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut mock = MockTransport::new();
    mock.push_target(TargetDescriptor::from_bytes(vec![0x08, 0x04, 0x6A, 0xBF]));
    mock.push_response(ppse_response());
    mock.push_response(application_fci());
    mock.push_response(record_with_pan());

    // Caller-side acquisition loop: keep asking the driver until a card
    // shows up. With the mock, the first poll answers.
    let target = loop {
        if let Some(target) = mock.select_passive_target()? {
            break target;
        }
    };
    println!("target detected: {}", bytes_to_hex(target.as_bytes()));

    let mut session = CardSession::new(Box::new(mock));
    let card = session.read_pan()?;

    println!("AID: {}", card.aid());
    println!("PAN: {}", card.pan());
    Ok(())
}
