#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use emvtap::constants::PAN_RECORD_SCAN;
use emvtap::protocol::Command;

#[test]
fn select_ppse_is_the_fixed_twenty_byte_template() {
    let apdu = Command::SelectPpse.encode();
    let expected: Vec<u8> = [
        &[0x00u8, 0xA4, 0x04, 0x00, 0x0E][..],
        b"2PAY.SYS.DDF01",
        &[0x00],
    ]
    .concat();
    assert_eq!(apdu, expected);
}

#[test]
fn select_application_wraps_the_aid() {
    let aid = fixtures::sample_aid();
    let apdu = Command::SelectApplication { aid }.encode();

    let mut expected = vec![0x00, 0xA4, 0x04, 0x00, 0x07];
    expected.extend_from_slice(&fixtures::sample_aid_bytes());
    assert_eq!(apdu, expected);
}

#[test]
fn record_scan_list_encodes_the_fixed_order() {
    let apdus: Vec<Vec<u8>> = PAN_RECORD_SCAN
        .iter()
        .map(|addr| Command::ReadRecord { address: *addr }.encode())
        .collect();

    assert_eq!(
        apdus,
        vec![
            vec![0x00, 0xB2, 0x01, 0x1C, 0x00],
            vec![0x00, 0xB2, 0x01, 0x0C, 0x00],
            vec![0x00, 0xB2, 0x02, 0x0C, 0x00],
            vec![0x00, 0xB2, 0x01, 0x14, 0x00],
            vec![0x00, 0xB2, 0x02, 0x14, 0x00],
            vec![0x00, 0xB2, 0x04, 0x14, 0x00],
        ]
    );
}
