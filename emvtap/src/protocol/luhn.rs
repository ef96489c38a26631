// emvtap/src/protocol/luhn.rs

//! Luhn checksum over decimal digit strings.

use crate::{Error, Result};

/// Substitution table applied at even positions: the doubled digit with the
/// cross sum of values over 9 already folded in.
const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validate a digit string with the Luhn checksum.
///
/// Positions alternate starting odd at the rightmost digit; odd positions
/// contribute the digit itself, even positions contribute from the
/// substitution table. The string is valid iff the sum is a multiple of ten.
///
/// Input must be a non-empty run of ASCII digits. Anything else fails with
/// `Error::InvalidInput` instead of silently miscomputing.
pub fn validate(digits: &str) -> Result<bool> {
    if digits.is_empty() {
        return Err(Error::InvalidInput("empty digit string".to_string()));
    }

    let mut sum = 0u32;
    let mut odd = true;
    for c in digits.chars().rev() {
        let d = c
            .to_digit(10)
            .ok_or_else(|| Error::InvalidInput(format!("non-digit character '{}'", c)))?;
        sum += if odd { d } else { DOUBLED[d as usize] };
        odd = !odd;
    }

    Ok(sum % 10 == 0)
}
