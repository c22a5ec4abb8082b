//! Transcoding between standard base64 and the unpadded URL-safe alphabet.
//!
//! This is a character substitution, not a re-encoding: `+` and `/` swap
//! with `-` and `_`, and the `=` padding is dropped on the way out and
//! restored from the length on the way back.

use alloc::string::String;

/// Rewrites standard base64 into the URL-safe alphabet without padding.
///
/// ```rust
/// assert_eq!(bit_codec::url_encode("a+b/c="), "a-b_c");
/// ```
pub fn url_encode(value: &str) -> String {
    value
        .chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Rewrites URL-safe base64 back to the standard alphabet and restores
/// padding from `value.len() % 4`.
///
/// A remainder of 1 can never come from a real encoding and is passed
/// through without padding.
///
/// ```rust
/// assert_eq!(bit_codec::url_decode("-_8"), "+/8=");
/// assert_eq!(bit_codec::url_decode("Zg"), "Zg==");
/// ```
pub fn url_decode(value: &str) -> String {
    let mut out: String = value
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    match value.len() % 4 {
        2 => out.push_str("=="),
        3 => out.push('='),
        _ => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_substitutes_and_strips_padding() {
        assert_eq!(url_encode("a+b/c="), "a-b_c");
        assert_eq!(url_encode("+/8="), "-_8");
        assert_eq!(url_encode("Zg=="), "Zg");
        assert_eq!(url_encode(""), "");
    }

    #[test]
    fn decode_restores_padding_by_length() {
        assert_eq!(url_decode("Zm9v"), "Zm9v");
        assert_eq!(url_decode("Zm8"), "Zm8=");
        assert_eq!(url_decode("Zg"), "Zg==");
        assert_eq!(url_decode(""), "");
    }

    #[test]
    fn degenerate_length_gets_no_padding() {
        assert_eq!(url_decode("Zm9vY"), "Zm9vY");
        // "a+b/c=" is not a real encoding; its five URL-safe characters
        // leave a remainder of 1, so the '=' is not restored.
        assert_eq!(url_decode("a-b_c"), "a+b/c");
    }

    #[test]
    fn decode_reverses_encode() {
        for b64 in ["+/8=", "Zg==", "Zm8=", "Zm9v", "++//"] {
            assert_eq!(url_decode(&url_encode(b64)), b64);
        }
    }
}
