//! # bit_array
//!
//! A fixed-size bit array that serializes to base64 text. Bits go through a
//! binary digit string and a hexadecimal string on their way to base64, using
//! the conversions in [`bit_codec`].
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut flags = BitArray::new(12);
//! flags.set(0).unwrap();
//! flags.set(11).unwrap();
//!
//! let text = flags.to_base64().unwrap();
//! assert_eq!(text, "gBA=");
//!
//! let mut copy = BitArray::new(12);
//! copy.from_base64(&text).unwrap();
//! assert_eq!(copy.get(11), Some(true));
//! ```
//!
//! ## Features
//! - `std` (default): `std::error::Error` impls via `thiserror`
//!
//! Without `std` the crate is `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BitArrayError;

mod bit_ops;

pub mod array;
pub use array::BitArray;

pub use bit_codec::{self, CodecError};
