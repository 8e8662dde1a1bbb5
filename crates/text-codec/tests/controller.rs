//! Controller behaviour against an in-memory host.

use text_codec::{
    Clipboard, ClipboardError, CodecError, Controller, CopyOutcome, MessageKind, Messages, Mode,
    Notifier, TextCodec, TextSurface,
};

struct MemoryHost {
    input: String,
    output: String,
    counter: String,
    notifications: Vec<(String, MessageKind)>,
    clipboard: Option<String>,
    selection: Option<String>,
    native: Result<(), ClipboardError>,
    fallback: Result<(), ClipboardError>,
}

impl MemoryHost {
    fn with_input(text: &str) -> Self {
        Self {
            input: text.to_string(),
            output: String::new(),
            counter: String::new(),
            notifications: Vec::new(),
            clipboard: None,
            selection: None,
            native: Ok(()),
            fallback: Ok(()),
        }
    }
}

impl TextSurface for MemoryHost {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn output_text(&self) -> String {
        self.output.clone()
    }

    fn set_output_text(&mut self, text: &str) {
        self.output = text.to_string();
    }

    fn show_char_count(&mut self, label: &str) {
        self.counter = label.to_string();
    }
}

impl Notifier for MemoryHost {
    fn notify(&mut self, message: &str, kind: MessageKind) {
        self.notifications.push((message.to_string(), kind));
    }
}

impl Clipboard for MemoryHost {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.native.clone()?;
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn copy_by_selection(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.fallback.clone()?;
        self.selection = Some(text.to_string());
        Ok(())
    }
}

fn controller(input: &str) -> Controller<MemoryHost> {
    Controller::new(TextCodec::new(), Messages::default(), MemoryHost::with_input(input))
}

#[test]
fn counter_is_initialised_on_construction() {
    let c = controller("héllo🙂");
    assert_eq!(c.host().counter, "7 characters");
}

#[test]
fn encode_renders_output() {
    let mut c = controller("Hello, World!");
    let result = c.update_output(Mode::Encode);
    assert_eq!(result.as_deref(), Ok("SGVsbG8sIFdvcmxkIQ=="));
    assert_eq!(c.host().output, "SGVsbG8sIFdvcmxkIQ==");
    assert!(c.host().notifications.is_empty());
}

#[test]
fn decode_failure_clears_output_and_notifies() {
    let mut c = controller("SGVsbG8=");
    c.update_output(Mode::Decode).unwrap();
    assert_eq!(c.host().output, "Hello");

    c.host_mut().input = "not base64!!".to_string();
    let result = c.update_output(Mode::Decode);
    assert!(matches!(result, Err(CodecError::InvalidEncodedInput(_))));
    assert_eq!(c.host().output, "");
    assert_eq!(
        c.host().notifications,
        vec![("Invalid Base64 format".to_string(), MessageKind::Error)]
    );
    assert_eq!(c.host().counter, "12 characters");
}

#[test]
fn uses_configured_messages() {
    let host = MemoryHost::with_input("QQ=");
    let mut c = Controller::new(TextCodec::new(), Messages::ukrainian(), host);
    assert!(c.update_output(Mode::Decode).is_err());
    assert_eq!(c.host().notifications[0].0, "Невірний формат Base64");
    assert_eq!(c.host().counter, "3 символів");
}

#[test]
fn clear_empties_both_fields() {
    let mut c = controller("abc");
    c.update_output(Mode::Encode).unwrap();
    c.clear_text();
    assert_eq!(c.host().input, "");
    assert_eq!(c.host().output, "");
    assert_eq!(c.host().counter, "0 characters");
}

#[test]
fn copy_skips_empty_output() {
    let mut c = controller("abc");
    assert_eq!(c.copy_to_clipboard(), CopyOutcome::Skipped);
    assert!(c.host().notifications.is_empty());
}

#[test]
fn copy_uses_native_clipboard() {
    let mut c = controller("abc");
    c.update_output(Mode::Encode).unwrap();
    assert_eq!(c.copy_to_clipboard(), CopyOutcome::Copied);
    assert_eq!(c.host().clipboard.as_deref(), Some("YWJj"));
    assert_eq!(c.host().selection, None);
    assert_eq!(
        c.host().notifications,
        vec![("Result copied to clipboard!".to_string(), MessageKind::Success)]
    );
}

#[test]
fn copy_falls_back_when_clipboard_unavailable() {
    let mut c = controller("abc");
    c.host_mut().native = Err(ClipboardError::Unavailable);
    c.update_output(Mode::Encode).unwrap();
    assert_eq!(c.copy_to_clipboard(), CopyOutcome::CopiedWithFallback);
    assert_eq!(c.host().clipboard, None);
    assert_eq!(c.host().selection.as_deref(), Some("YWJj"));
    assert_eq!(c.host().notifications.len(), 1);
}

#[test]
fn copy_failure_is_silent() {
    let mut c = controller("abc");
    c.host_mut().native = Err(ClipboardError::Failed("denied".to_string()));
    c.update_output(Mode::Encode).unwrap();
    assert_eq!(c.copy_to_clipboard(), CopyOutcome::Failed);
    assert_eq!(c.host().selection, None);
    assert!(c.host().notifications.is_empty());
}

#[test]
fn fallback_failure_is_silent() {
    let mut c = controller("abc");
    c.host_mut().native = Err(ClipboardError::Unavailable);
    c.host_mut().fallback = Err(ClipboardError::Unavailable);
    c.update_output(Mode::Encode).unwrap();
    assert_eq!(c.copy_to_clipboard(), CopyOutcome::Failed);
    assert!(c.host().notifications.is_empty());
}

#[test]
fn counter_counts_utf16_code_units() {
    let mut c = controller("");
    c.host_mut().input = "a🙂e\u{301}".to_string();
    c.update_char_count();
    assert_eq!(c.host().counter, "5 characters");
}
