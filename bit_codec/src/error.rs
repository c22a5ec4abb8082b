#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[cfg_attr(
        feature = "std",
        error("invalid binary digit 0x{byte:02x} at byte {index}")
    )]
    InvalidBinaryDigit { index: usize, byte: u8 },

    #[cfg_attr(
        feature = "std",
        error("invalid hexadecimal digit 0x{byte:02x} at byte {index}")
    )]
    InvalidHexDigit { index: usize, byte: u8 },

    #[cfg_attr(
        feature = "std",
        error("hex string of length {0} does not split into whole bytes")
    )]
    OddHexLength(usize),

    #[cfg_attr(feature = "std", error("malformed base64: {0}"))]
    Base64(base64ct::Error),
}

impl From<base64ct::Error> for CodecError {
    fn from(err: base64ct::Error) -> Self {
        CodecError::Base64(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::InvalidBinaryDigit { index, byte } => {
                write!(f, "invalid binary digit 0x{:02x} at byte {}", byte, index)
            }
            CodecError::InvalidHexDigit { index, byte } => {
                write!(f, "invalid hexadecimal digit 0x{:02x} at byte {}", byte, index)
            }
            CodecError::OddHexLength(len) => {
                write!(f, "hex string of length {} does not split into whole bytes", len)
            }
            CodecError::Base64(e) => write!(f, "malformed base64: {}", e),
        }
    }
}
