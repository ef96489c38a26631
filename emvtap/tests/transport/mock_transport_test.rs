#[path = "../common/mod.rs"]
mod common;

use emvtap::transport::{MockTransport, TargetAcquisition, Transport};
use emvtap::types::TargetDescriptor;

#[test]
fn mock_records_commands_and_replays_responses() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x90, 0x00]);
    m.push_response(vec![0x6A, 0x82]);

    assert_eq!(m.transceive(&[0x00, 0xA4], 500).unwrap(), vec![0x90, 0x00]);
    assert_eq!(m.transceive(&[0x00, 0xB2], 500).unwrap(), vec![0x6A, 0x82]);
    assert_eq!(m.sent, vec![vec![0x00, 0xA4], vec![0x00, 0xB2]]);
}

#[test]
fn drained_mock_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(
        m.transceive(&[0x00], 500),
        Err(emvtap::Error::Timeout)
    ));
    // The command is still recorded even when the exchange fails.
    assert_eq!(m.pop_sent(), Some(vec![0x00]));
}

#[test]
fn target_polling_drains_queued_targets() {
    let mut m = MockTransport::new();
    m.push_target(TargetDescriptor::from_bytes(vec![0x08, 0x77, 0x01]));

    let target = m.select_passive_target().unwrap().unwrap();
    assert_eq!(target.as_bytes(), &[0x08, 0x77, 0x01]);
    assert_eq!(m.select_passive_target().unwrap(), None);
}
