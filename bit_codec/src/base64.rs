//! Hexadecimal digit strings to and from standard (padded) base64.

use crate::{CodecError, Result};
use alloc::string::String;
use alloc::vec::Vec;
use base64ct::{Base64, Encoding};
use core::fmt::Write;

#[inline]
fn hex_value(index: usize, byte: u8) -> Result<u8> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(CodecError::InvalidHexDigit { index, byte }),
    }
}

/// Encodes a hexadecimal string as standard base64.
///
/// Carriage returns and newlines anywhere in the input are ignored. Each
/// remaining pair of digits is one byte.
///
/// ```rust
/// use bit_codec::hex_to_base64;
///
/// assert_eq!(hex_to_base64("FB01").unwrap(), "+wE=");
/// assert_eq!(hex_to_base64("fb\r\n01").unwrap(), "+wE=");
/// ```
///
/// # Errors
///
/// [`CodecError::OddHexLength`] if the digits do not pair up, and
/// [`CodecError::InvalidHexDigit`] for any other non-hex byte. The index
/// reported is relative to the input with line breaks removed.
pub fn hex_to_base64(hex: &str) -> Result<String> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|&b| b != b'\r' && b != b'\n')
        .collect();

    if digits.len() % 2 != 0 {
        tracing::debug!(len = digits.len(), "hex string has a dangling digit");
        return Err(CodecError::OddHexLength(digits.len()));
    }

    let bytes = digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8> {
            let hi = hex_value(2 * i, pair[0])?;
            let lo = hex_value(2 * i + 1, pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(Base64::encode_string(&bytes))
}

/// Decodes standard base64 and renders the bytes as lowercase hex pairs.
///
/// Trailing spaces, carriage returns and newlines are stripped first.
///
/// ```rust
/// use bit_codec::base64_to_hex;
///
/// assert_eq!(base64_to_hex("+wE=\n").unwrap(), "fb01");
/// assert_eq!(base64_to_hex("").unwrap(), "");
/// ```
///
/// # Errors
///
/// [`CodecError::Base64`] if the input is not canonical padded base64.
pub fn base64_to_hex(b64: &str) -> Result<String> {
    let trimmed = b64.trim_end_matches([' ', '\r', '\n']);
    let bytes = Base64::decode_vec(trimmed).map_err(|e| {
        tracing::debug!(error = %e, "base64 decode failed");
        CodecError::from(e)
    })?;

    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(hex, "{:02x}", byte);
    }
    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_rfc4648_vectors() {
        // "f", "fo", "foo", "foob" as hex
        assert_eq!(hex_to_base64("66").unwrap(), "Zg==");
        assert_eq!(hex_to_base64("666f").unwrap(), "Zm8=");
        assert_eq!(hex_to_base64("666f6f").unwrap(), "Zm9v");
        assert_eq!(hex_to_base64("666F6F62").unwrap(), "Zm9vYg==");
    }

    #[test]
    fn empty_hex_is_empty_base64() {
        assert_eq!(hex_to_base64("").unwrap(), "");
        assert_eq!(hex_to_base64("\r\n").unwrap(), "");
    }

    #[test]
    fn uses_standard_alphabet() {
        assert_eq!(hex_to_base64("FBFF").unwrap(), "+/8=");
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(hex_to_base64("ABC"), Err(CodecError::OddHexLength(3)));
    }

    #[test]
    fn bad_hex_digit_is_rejected() {
        assert_eq!(
            hex_to_base64("0g"),
            Err(CodecError::InvalidHexDigit { index: 1, byte: b'g' })
        );
    }

    #[test]
    fn decodes_to_lowercase_pairs() {
        assert_eq!(base64_to_hex("Zm9vYg==").unwrap(), "666f6f62");
        assert_eq!(base64_to_hex("AAo=").unwrap(), "000a");
        assert_eq!(base64_to_hex("+/8=").unwrap(), "fbff");
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert_eq!(base64_to_hex("Zm9v \r\n").unwrap(), "666f6f");
    }

    #[test]
    fn malformed_base64_is_rejected() {
        assert!(matches!(base64_to_hex("Zm9v!"), Err(CodecError::Base64(_))));
        assert!(matches!(base64_to_hex("Zg"), Err(CodecError::Base64(_))));
        // URL-safe characters are not part of the standard alphabet.
        assert!(matches!(base64_to_hex("-_8="), Err(CodecError::Base64(_))));
    }

    #[test]
    fn hex_base64_hex_preserves_bytes() {
        let hex = "00ff10a5";
        let b64 = hex_to_base64(hex).unwrap();
        assert_eq!(base64_to_hex(&b64).unwrap(), hex);
    }
}
