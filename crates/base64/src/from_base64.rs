//! Strict standard base64 decoding.

use crate::constants::{DECODE_TABLE, INVALID, PAD_BYTE};
use crate::Base64Error;

fn sextet(encoded: &[u8], offset: usize) -> Result<u8, Base64Error> {
    let byte = encoded[offset];
    match DECODE_TABLE[byte as usize] {
        INVALID => Err(Base64Error::InvalidByte { offset, byte }),
        value => Ok(value),
    }
}

/// Decodes a padded standard base64 string to bytes.
///
/// Rejects whitespace, missing padding and URL-safe symbols. Bits of the
/// final symbol that fall past the last whole byte are ignored, so `"QR=="`
/// decodes like `"QQ=="`.
///
/// # Errors
///
/// See [`Base64Error`] for the individual rejection reasons.
///
/// # Example
///
/// ```
/// use text_codec_base64::{from_base64, Base64Error};
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(from_base64("QQ="), Err(Base64Error::InvalidLength(3)));
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let encoded = encoded.as_bytes();
    let length = encoded.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }

    let padding = encoded[length - 4..]
        .iter()
        .rev()
        .take_while(|&&b| b == PAD_BYTE)
        .count();
    if padding > 2 {
        return Err(Base64Error::InvalidPadding);
    }

    // Every full quartet except a padded tail decodes to three bytes.
    let main_length = if padding > 0 { length - 4 } else { length };
    let mut buf = Vec::with_capacity(length / 4 * 3 - padding);

    let mut i = 0;
    while i < main_length {
        let s0 = sextet(encoded, i)?;
        let s1 = sextet(encoded, i + 1)?;
        let s2 = sextet(encoded, i + 2)?;
        let s3 = sextet(encoded, i + 3)?;
        buf.push((s0 << 2) | (s1 >> 4));
        buf.push((s1 << 4) | (s2 >> 2));
        buf.push((s2 << 6) | s3);
        i += 4;
    }

    match padding {
        2 => {
            let s0 = sextet(encoded, main_length)?;
            let s1 = sextet(encoded, main_length + 1)?;
            buf.push((s0 << 2) | (s1 >> 4));
        }
        1 => {
            let s0 = sextet(encoded, main_length)?;
            let s1 = sextet(encoded, main_length + 1)?;
            let s2 = sextet(encoded, main_length + 2)?;
            buf.push((s0 << 2) | (s1 >> 4));
            buf.push((s1 << 4) | (s2 >> 2));
        }
        _ => {}
    }

    Ok(buf)
}
