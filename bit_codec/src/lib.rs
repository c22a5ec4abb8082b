//! # bit_codec
//!
//! Text conversions used to serialize bit strings: binary digits to
//! hexadecimal digits, hexadecimal to standard base64, and standard base64 to
//! the unpadded URL-safe alphabet.
//!
//! ```rust
//! use bit_codec::{binary_to_hex, hex_to_base64, url_encode};
//!
//! let hex = binary_to_hex("1111101100000001").unwrap();
//! assert_eq!(hex, "FB01");
//!
//! let b64 = hex_to_base64(&hex).unwrap();
//! assert_eq!(b64, "+wE=");
//! assert_eq!(url_encode(&b64), "-wE");
//! ```
//!
//! Every conversion that can see malformed input returns a [`CodecError`]
//! instead of panicking.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::CodecError;

pub mod base64;
pub mod binary;
pub mod url;

pub use base64::{base64_to_hex, hex_to_base64};
pub use binary::{binary_to_hex, hex_to_binary};
pub use url::{url_decode, url_encode};

pub type Result<T> = core::result::Result<T, CodecError>;
