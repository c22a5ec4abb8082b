//! Conversions between binary digit strings and hexadecimal digit strings.
//!
//! A binary string is read most-significant digit first. Its length does not
//! have to be a multiple of 4: digits are grouped into nibbles from the
//! least-significant end, and a leading group of one to three digits becomes
//! a single decimal digit in the range `0..=7`.
//!
//! ```rust
//! use bit_codec::{binary_to_hex, hex_to_binary};
//!
//! assert_eq!(binary_to_hex("1010").unwrap(), "A");
//! assert_eq!(binary_to_hex("1011010").unwrap(), "5A");
//! assert_eq!(hex_to_binary("5a").unwrap(), "01011010");
//! assert!(binary_to_hex("102").is_err());
//! ```

use crate::{CodecError, Result};
use alloc::string::String;
use alloc::vec::Vec;

const NIBBLE: usize = 4;

/// Fixed 4-digit renderings of every accepted hexadecimal digit.
const HEX_TABLE: [(u8, &str); 22] = [
    (b'0', "0000"),
    (b'1', "0001"),
    (b'2', "0010"),
    (b'3', "0011"),
    (b'4', "0100"),
    (b'5', "0101"),
    (b'6', "0110"),
    (b'7', "0111"),
    (b'8', "1000"),
    (b'9', "1001"),
    (b'a', "1010"),
    (b'b', "1011"),
    (b'c', "1100"),
    (b'd', "1101"),
    (b'e', "1110"),
    (b'f', "1111"),
    (b'A', "1010"),
    (b'B', "1011"),
    (b'C', "1100"),
    (b'D', "1101"),
    (b'E', "1110"),
    (b'F', "1111"),
];

#[inline]
fn nibble_bits(digit: u8) -> Option<&'static str> {
    HEX_TABLE
        .iter()
        .find(|(d, _)| *d == digit)
        .map(|(_, bits)| *bits)
}

/// Accumulates `digits` (starting at byte `offset` of the input) as one
/// unsigned binary number.
fn accumulate(digits: &[u8], offset: usize) -> Result<u8> {
    digits.iter().enumerate().try_fold(0u8, |acc, (i, &d)| match d {
        b'0' | b'1' => Ok(acc * 2 + (d - b'0')),
        _ => {
            tracing::debug!(index = offset + i, byte = d, "rejecting binary digit");
            Err(CodecError::InvalidBinaryDigit {
                index: offset + i,
                byte: d,
            })
        }
    })
}

/// Converts a string of `'0'`/`'1'` digits to uppercase hexadecimal.
///
/// Full nibbles are taken from the right. Any one to three digits left over
/// at the front are read as a small number and written as its decimal digit,
/// so `"101"` becomes `"5"` and `"11111"` becomes `"1F"`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBinaryDigit`] for the first non-binary byte
/// encountered. Nibbles are checked from the right, then the leftover prefix.
pub fn binary_to_hex(s: &str) -> Result<String> {
    let bytes = s.as_bytes();
    let head = bytes.len() % NIBBLE;

    // Produced right to left, reversed once at the end.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() / NIBBLE + 1);

    let mut end = bytes.len();
    while end - head >= NIBBLE {
        let start = end - NIBBLE;
        let value = accumulate(&bytes[start..end], start)?;
        digits.push(hex_digit(value));
        end = start;
    }

    if head > 0 {
        // At most 3 digits, so the value never exceeds 7.
        let value = accumulate(&bytes[..head], 0)?;
        digits.push(b'0' + value);
    }

    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

#[inline]
fn hex_digit(value: u8) -> u8 {
    debug_assert!(value < 16);
    if value >= 10 {
        b'A' + (value - 10)
    } else {
        b'0' + value
    }
}

/// Converts hexadecimal digits (either case) to a binary string with four
/// digits per input character.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHexDigit`] for the first byte that is not a
/// hexadecimal digit. Nothing after it is examined.
pub fn hex_to_binary(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len() * NIBBLE);
    for (index, &byte) in s.as_bytes().iter().enumerate() {
        match nibble_bits(byte) {
            Some(bits) => out.push_str(bits),
            None => {
                tracing::debug!(index, byte, "rejecting hexadecimal digit");
                return Err(CodecError::InvalidHexDigit { index, byte });
            }
        }
    }
    Ok(out)
}
