use bit_codec::CodecError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(feature = "std", error("serialization error: {0}"))]
    Codec(#[cfg_attr(feature = "std", from)] CodecError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitArrayError::Codec(e) => write!(f, "serialization error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<CodecError> for BitArrayError {
    fn from(err: CodecError) -> Self {
        BitArrayError::Codec(err)
    }
}
