//! Unicode text <-> Base64 codec.
//!
//! Text is converted to UTF-8 bytes and mapped through padded standard
//! Base64. Decoding rejects bad symbols, length or padding and any payload
//! that is not valid UTF-8; there is no lossy fallback.

use std::fmt;
use std::str::FromStr;

use text_codec_base64::{from_base64, to_base64, Base64Error};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

/// Why an encoded string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputCause {
    /// Bad alphabet, length or padding.
    #[error(transparent)]
    Base64(#[from] Base64Error),
    /// Well-formed Base64 whose payload is not UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// The only error the codec produces. Raised by decoding alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid encoded input: {0}")]
    InvalidEncodedInput(#[source] InvalidInputCause),
}

impl CodecError {
    /// The underlying reason, for diagnostics.
    pub fn cause(&self) -> &InvalidInputCause {
        match self {
            CodecError::InvalidEncodedInput(cause) => cause,
        }
    }
}

impl From<Base64Error> for CodecError {
    fn from(e: Base64Error) -> Self {
        CodecError::InvalidEncodedInput(e.into())
    }
}

impl From<std::str::Utf8Error> for CodecError {
    fn from(e: std::str::Utf8Error) -> Self {
        CodecError::InvalidEncodedInput(e.into())
    }
}

// ── Mode ──────────────────────────────────────────────────────────────────

/// Which transformation [`TextCodec::process`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?}, expected \"encode\" or \"decode\"")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────

/// Stateless text codec. Construct it once and pass it to whoever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec;

impl TextCodec {
    pub const fn new() -> Self {
        TextCodec
    }

    /// Encodes `text` as padded standard Base64 of its UTF-8 bytes.
    ///
    /// ```
    /// use text_codec::TextCodec;
    ///
    /// assert_eq!(TextCodec::new().encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
    /// ```
    pub fn encode(&self, text: &str) -> String {
        to_base64(text.as_bytes())
    }

    /// Decodes Base64 back to text.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidEncodedInput`] when `encoded` is not strict
    /// padded Base64 (whitespace included) or its payload is not UTF-8.
    pub fn decode(&self, encoded: &str) -> Result<String, CodecError> {
        let bytes = from_base64(encoded)?;
        let text = std::str::from_utf8(&bytes)?;
        Ok(text.to_owned())
    }

    /// Runs [`encode`](Self::encode) or [`decode`](Self::decode) for `mode`.
    /// Encoding always yields `Ok`.
    pub fn process(&self, mode: Mode, text: &str) -> Result<String, CodecError> {
        match mode {
            Mode::Encode => Ok(self.encode(text)),
            Mode::Decode => self.decode(text),
        }
    }
}

/// Shorthand for [`TextCodec::encode`].
pub fn encode(text: &str) -> String {
    TextCodec.encode(text)
}

/// Shorthand for [`TextCodec::decode`].
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    TextCodec.decode(encoded)
}

/// Shorthand for [`TextCodec::process`].
pub fn process(mode: Mode, text: &str) -> Result<String, CodecError> {
    TextCodec.process(mode, text)
}
