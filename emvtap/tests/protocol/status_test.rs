#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use emvtap::protocol::{has_success_trailer, is_selectable_application};

#[test]
fn one_byte_buffer_is_never_valid() {
    assert!(!has_success_trailer(&[0x90]));
    assert!(!has_success_trailer(&[]));
}

#[test]
fn trailer_decides_success() {
    assert!(has_success_trailer(&[0x6F, 0x00, 0x90, 0x00]));
    assert!(!has_success_trailer(&fixtures::rejected_response()));
}

#[test]
fn application_fci_is_selectable() {
    assert!(is_selectable_application(&fixtures::application_fci_response()));
}

#[test]
fn selectable_check_rejects_wrong_shape() {
    // Right trailer, wrong leading tag.
    assert!(!is_selectable_application(&fixtures::record_without_pan()));
    // Right leading tag, failure trailer.
    assert!(!is_selectable_application(&[0x6F, 0x00, 0x6A, 0x82]));
}
