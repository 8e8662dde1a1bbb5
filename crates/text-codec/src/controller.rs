//! Host-agnostic controller for an interactive codec front end.
//!
//! The controller owns the UI workflow: run the codec on the input field,
//! render the result or an error notification, keep the character counter
//! current, clear both fields, and copy the output with a manual-selection
//! fallback. Everything visual is delegated to a [`Host`].

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{CodecError, Mode, TextCodec};
use crate::config::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No native clipboard; the controller falls back to manual selection.
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Failed(String),
}

/// Input field, output field and the counter label.
pub trait TextSurface {
    fn input_text(&self) -> String;
    fn set_input_text(&mut self, text: &str);
    fn output_text(&self) -> String;
    fn set_output_text(&mut self, text: &str);
    fn show_char_count(&mut self, label: &str);
}

/// Transient user-visible messages (toasts, status lines).
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: MessageKind);
}

pub trait Clipboard {
    /// Native clipboard write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Presents `text` so the user can select and copy it by hand.
    fn copy_by_selection(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// Everything the controller needs from its environment.
pub trait Host: TextSurface + Notifier + Clipboard {}

impl<T: TextSurface + Notifier + Clipboard> Host for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Output was empty.
    Skipped,
    Copied,
    CopiedWithFallback,
    Failed,
}

pub struct Controller<H> {
    codec: TextCodec,
    messages: Messages,
    host: H,
}

impl<H: Host> Controller<H> {
    pub fn new(codec: TextCodec, messages: Messages, host: H) -> Self {
        let mut controller = Self {
            codec,
            messages,
            host,
        };
        controller.update_char_count();
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Runs the codec on the current input and renders the outcome. On
    /// failure the output is cleared and an error notification is shown.
    pub fn update_output(&mut self, mode: Mode) -> Result<String, CodecError> {
        let input = self.host.input_text();
        debug!(%mode, input_len = input.len(), "processing input");

        let result = self.codec.process(mode, &input);
        match &result {
            Ok(output) => self.host.set_output_text(output),
            Err(err) => {
                debug!(error = %err, "rejected input");
                self.host
                    .notify(&self.messages.invalid_base64, MessageKind::Error);
                self.host.set_output_text("");
            }
        }

        self.update_char_count();
        result
    }

    /// Counts UTF-16 code units, the length a text widget reports.
    pub fn update_char_count(&mut self) {
        let count = self.host.input_text().encode_utf16().count();
        let label = self.messages.char_count_label(count);
        self.host.show_char_count(&label);
    }

    pub fn clear_text(&mut self) {
        self.host.set_input_text("");
        self.host.set_output_text("");
        self.update_char_count();
    }

    pub fn copy_to_clipboard(&mut self) -> CopyOutcome {
        let output = self.host.output_text();
        if output.is_empty() {
            return CopyOutcome::Skipped;
        }

        let outcome = match self.host.write_text(&output) {
            Ok(()) => Ok(CopyOutcome::Copied),
            Err(ClipboardError::Unavailable) => self
                .host
                .copy_by_selection(&output)
                .map(|()| CopyOutcome::CopiedWithFallback),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(outcome) => {
                self.host.notify(&self.messages.copied, MessageKind::Success);
                outcome
            }
            Err(err) => {
                warn!(error = %err, "failed to copy output to clipboard");
                CopyOutcome::Failed
            }
        }
    }
}
