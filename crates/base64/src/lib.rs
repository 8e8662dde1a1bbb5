//! Strict standard Base64 over byte slices.
//!
//! Encoding always uses the standard alphabet with `=` padding. Decoding
//! accepts only the padded standard form: whitespace, missing padding and
//! URL-safe symbols are rejected.
//!
//! # Example
//!
//! ```
//! use text_codec_base64::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::{encoded_len, to_base64};

/// Error type for base64 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The base64 string length must be a multiple of 4.
    #[error("base64 string length {0} is not a multiple of 4")]
    InvalidLength(usize),
    /// A byte outside the alphabet, or padding in a position it cannot occupy.
    #[error("invalid base64 byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
    /// The final quartet has a malformed padding run.
    #[error("invalid base64 padding")]
    InvalidPadding,
}
