//! Fixed-size bit array with base64 serialization.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new(10);
//! bits.set(0).unwrap();
//! bits.set(9).unwrap();
//!
//! assert_eq!(bits.get(0), Some(true));
//! assert_eq!(bits.get(1), Some(false));
//! assert_eq!(bits.get(10), None);
//! assert!(bits[9]);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new(16);
//! bits.set(0).unwrap();
//! bits.set(6).unwrap();
//!
//! // Save as text
//! let encoded = bits.to_base64_url_safe().unwrap();
//! assert_eq!(encoded, "ggA");
//!
//! // Restore later
//! let mut restored = BitArray::new(16);
//! restored.from_base64_url_safe(&encoded).unwrap();
//! assert_eq!(restored, bits);
//! ```
use crate::{BitArrayError, bit_ops};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use bit_codec::{base64_to_hex, binary_to_hex, hex_to_base64, hex_to_binary, url_decode, url_encode};
use core::ops::Index;

type Result<T> = core::result::Result<T, BitArrayError>;

/// A fixed number of bits, all `false` at construction.
///
/// The length never changes after [`BitArray::new`]. Bits are packed eight
/// to a byte; index 0 is the most significant bit of the first byte, which is
/// also the first character of the serialized binary string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitArray {
    storage: Vec<u8>,
    len: usize,
}

impl BitArray {
    /// Creates an array of `len` cleared bits.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::new(5);
    /// assert_eq!(bits.len(), 5);
    /// assert_eq!(bits.get(4), Some(false));
    /// ```
    pub fn new(len: usize) -> Self {
        Self {
            storage: vec![0u8; len.div_ceil(8)],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfBounds(index, self.len))
        }
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(bit_ops::get_bit(&self.storage, index))
    }

    /// Writes `value` at `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfBounds`] if `index >= len()`. The array is
    /// not modified in that case.
    pub fn set_value(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        bit_ops::set_bit(&mut self.storage, index, value);
        Ok(())
    }

    /// Sets the bit at `index` to `true`.
    ///
    /// ```
    /// use bit_array::{BitArray, BitArrayError};
    ///
    /// let mut bits = BitArray::new(3);
    /// bits.set(2).unwrap();
    /// assert_eq!(bits.get(2), Some(true));
    /// assert_eq!(bits.set(3), Err(BitArrayError::IndexOutOfBounds(3, 3)));
    /// ```
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.set_value(index, true)
    }

    /// Sets the bit at `index` to `false`.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.set_value(index, false)
    }

    /// Renders the bits as `'1'`/`'0'` characters, index 0 first.
    pub fn to_binary_string(&self) -> String {
        (0..self.len)
            .map(|i| {
                if bit_ops::get_bit(&self.storage, i) {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    /// Serializes the bits as standard padded base64.
    ///
    /// The binary string is extended with `'0'`s to a whole number of bytes
    /// before conversion, so index 0 always lands in the most significant bit
    /// of the first encoded byte.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(8);
    /// for i in [0, 1, 2, 3, 4, 6, 7] {
    ///     bits.set(i).unwrap();
    /// }
    /// assert_eq!(bits.to_base64().unwrap(), "+w==");
    /// ```
    pub fn to_base64(&self) -> Result<String> {
        let mut binary = self.to_binary_string();
        let padded_len = self.len.div_ceil(8) * 8;
        binary.extend(core::iter::repeat_n('0', padded_len - self.len));

        let hex = binary_to_hex(&binary)?;
        tracing::trace!(bits = self.len, hex = %hex, "encoding bit array");
        Ok(hex_to_base64(&hex)?)
    }

    /// Replaces every bit from a standard base64 string.
    ///
    /// The first `len()` decoded bits are taken in order. A shorter payload
    /// leaves the remaining bits `false`; extra decoded bits are ignored.
    /// An empty string clears the array.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::Codec`] if `value` is not valid base64. The array is
    /// not modified in that case.
    pub fn from_base64(&mut self, value: &str) -> Result<()> {
        let hex = base64_to_hex(value)?;
        let binary = hex_to_binary(&hex)?;

        if binary.len() != self.len {
            tracing::debug!(
                expected = self.len,
                decoded = binary.len(),
                "decoded bit count differs from array length"
            );
        }

        let mut storage = vec![0u8; self.len.div_ceil(8)];
        for (i, digit) in binary.bytes().take(self.len).enumerate() {
            bit_ops::set_bit(&mut storage, i, digit == b'1');
        }
        self.storage = storage;
        Ok(())
    }

    /// Serializes the bits as unpadded URL-safe base64.
    pub fn to_base64_url_safe(&self) -> Result<String> {
        Ok(url_encode(&self.to_base64()?))
    }

    /// Replaces every bit from an unpadded URL-safe base64 string.
    ///
    /// Same truncation rules and errors as [`BitArray::from_base64`].
    pub fn from_base64_url_safe(&mut self, value: &str) -> Result<()> {
        self.from_base64(&url_decode(value))
    }
}

impl Index<usize> for BitArray {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!("index {} out of bounds for length {}", index, self.len),
        }
    }
}
