//! Unicode text to Base64 and back.
//!
//! The [`codec`] module is the whole contract: [`encode`] never fails,
//! [`decode`] returns [`CodecError::InvalidEncodedInput`] for anything that
//! is not strict Base64 of UTF-8 text, and [`process`] dispatches on a
//! [`Mode`]. The remaining modules are a presentation layer built on top:
//! a host-agnostic [`Controller`], its message catalogue, and a terminal
//! front end.
//!
//! # Example
//!
//! ```
//! use text_codec::{process, Mode};
//!
//! let encoded = process(Mode::Encode, "héllo🙂").unwrap();
//! assert_eq!(encoded, "aMOpbGxv8J+Zgg==");
//! assert_eq!(process(Mode::Decode, &encoded).unwrap(), "héllo🙂");
//! assert!(process(Mode::Decode, "not base64!!").is_err());
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod controller;

pub use codec::{
    decode, encode, process, CodecError, InvalidInputCause, Mode, TextCodec, UnknownMode,
};
pub use config::{ConfigError, Messages};
pub use controller::{
    Clipboard, ClipboardError, Controller, CopyOutcome, Host, MessageKind, Notifier, TextSurface,
};
