// emvtap/src/protocol/mod.rs

pub mod commands;
pub mod luhn;
pub mod status;
pub mod tlv;

pub use commands::*;
pub use status::{has_success_trailer, is_selectable_application};
pub use tlv::{find_aid, find_pan};
