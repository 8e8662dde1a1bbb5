//! `text-codec` command-line front end.
//!
//! Provides the logic behind the binary entry point:
//! - `text-codec encode [TEXT]` / `text-codec decode [TEXT]` — one shot,
//!   TEXT or stdin
//! - `text-codec interactive` — a line-oriented session driving
//!   [`Controller`] through a [`TerminalHost`]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::codec::{Mode, TextCodec};
use crate::config::{ConfigError, Messages};
use crate::controller::{
    Clipboard, ClipboardError, Controller, MessageKind, Notifier, TextSurface,
};

pub const USAGE: &str = "\
Usage:
  text-codec [OPTIONS] encode [TEXT]
  text-codec [OPTIONS] decode [TEXT]
  text-codec [OPTIONS] interactive

TEXT defaults to stdin; one trailing newline is stripped.

Options:
  --config <FILE>   load messages from a TOML file
  --lang <en|uk>    use a built-in message set
  -h, --help        print this help";

pub const SESSION_HELP: &str = "\
Type a line to set the input text. Commands:
  :encode  :decode  :clear  :copy  :show  :help  :quit
Start a line with '::' to enter text beginning with ':'.";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io(_) | CliError::Config(_) => 1,
        }
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run { mode: Mode, text: Option<String> },
    Interactive,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
}

impl Invocation {
    /// `--config` and `--lang` are exclusive; neither means English.
    pub fn messages(&self) -> Result<Messages, ConfigError> {
        match (&self.config, &self.lang) {
            (Some(path), _) => Messages::load(path),
            (None, Some(lang)) => Messages::for_language(lang),
            (None, None) => Ok(Messages::default()),
        }
    }
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut lang = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Invocation {
                    command: Command::Help,
                    config,
                    lang,
                })
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config requires a file".to_string()))?;
                config = Some(PathBuf::from(value));
            }
            "--lang" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--lang requires a value".to_string()))?;
                lang = Some(value);
            }
            // Anything after `--` is positional, even if it looks like a flag.
            "--" => positional.extend(args.by_ref()),
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option {flag}")));
            }
            _ => positional.push(arg),
        }
    }

    if config.is_some() && lang.is_some() {
        return Err(CliError::Usage(
            "--config and --lang cannot be combined".to_string(),
        ));
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None => return Err(CliError::Usage("missing command".to_string())),
        Some("interactive") => Command::Interactive,
        Some(name) => {
            let mode = name
                .parse::<Mode>()
                .map_err(|e| CliError::Usage(e.to_string()))?;
            Command::Run {
                mode,
                text: positional.next(),
            }
        }
    };
    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument {extra:?}")));
    }

    Ok(Invocation {
        command,
        config,
        lang,
    })
}

/// Drops one trailing `\n` or `\r\n`, as left by `echo` or a terminal.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

// ── One shot ──────────────────────────────────────────────────────────────

/// Processes `input` once. Returns the exit code: 0, or 1 when decoding
/// was rejected.
pub fn run_once<W: Write, E: Write>(
    codec: TextCodec,
    messages: &Messages,
    mode: Mode,
    input: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<i32> {
    match codec.process(mode, input) {
        Ok(result) => {
            writeln!(out, "{result}")?;
            Ok(0)
        }
        Err(e) => {
            debug!(error = %e, "one-shot {mode} failed");
            writeln!(err, "{}", messages.invalid_base64)?;
            Ok(1)
        }
    }
}

// ── Interactive ───────────────────────────────────────────────────────────

/// Terminal rendition of the UI. There is no native clipboard, so copying
/// always goes through the manual-selection fallback.
pub struct TerminalHost<W> {
    input: String,
    output: String,
    counter: String,
    out: W,
    io_error: Option<io::Error>,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            counter: String::new(),
            out,
            io_error: None,
        }
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a line; the first failure is kept and reported by
    /// [`take_io_error`](Self::take_io_error).
    pub fn emit(&mut self, line: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.io_error = Some(e);
        }
    }

    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }
}

impl<W: Write> TextSurface for TerminalHost<W> {
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

impl<W: Write> Notifier for TerminalHost<W> {
    fn notify(&mut self, message: &str, kind: MessageKind) {
        let tag = match kind {
            MessageKind::Success => "ok",
            MessageKind::Error => "error",
        };
        self.emit(&format!("[{tag}] {message}"));
    }
}

impl<W: Write> Clipboard for TerminalHost<W> {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }

    fn copy_by_selection(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.emit("----- select and copy -----");
        self.emit(text);
        self.emit("---------------------------");
        match self.io_error.as_ref() {
            Some(e) => Err(ClipboardError::Failed(e.to_string())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetInput(String),
    Process(Mode),
    Clear,
    Copy,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        if let Some(text) = line.strip_prefix("::") {
            return SessionCommand::SetInput(format!(":{text}"));
        }
        let Some(name) = line.strip_prefix(':') else {
            return SessionCommand::SetInput(line.to_string());
        };
        match name.trim() {
            "encode" => SessionCommand::Process(Mode::Encode),
            "decode" => SessionCommand::Process(Mode::Decode),
            "clear" => SessionCommand::Clear,
            "copy" => SessionCommand::Copy,
            "show" => SessionCommand::Show,
            "help" => SessionCommand::Help,
            "quit" | "q" => SessionCommand::Quit,
            other => SessionCommand::Unknown(other.to_string()),
        }
    }
}

/// Runs a session until `:quit` or end of input. Returns the writer.
pub fn run_interactive<R: BufRead, W: Write>(
    codec: TextCodec,
    messages: Messages,
    reader: R,
    out: W,
) -> Result<W, CliError> {
    let mut controller = Controller::new(codec, messages, TerminalHost::new(out));
    controller.host_mut().emit(SESSION_HELP);

    for line in reader.lines() {
        let line = line?;
        let command = SessionCommand::parse(&line);
        debug!(?command, "session command");

        match command {
            SessionCommand::SetInput(text) => {
                controller.host_mut().set_input_text(&text);
                controller.update_char_count();
            }
            SessionCommand::Process(mode) => {
                if let Ok(output) = controller.update_output(mode) {
                    controller.host_mut().emit(&output);
                }
            }
            SessionCommand::Clear => controller.clear_text(),
            SessionCommand::Copy => {
                controller.copy_to_clipboard();
            }
            SessionCommand::Show => {
                let host = controller.host_mut();
                let (input, output, counter) =
                    (host.input_text(), host.output_text(), host.counter().to_string());
                host.emit(&format!("input:  {input}"));
                host.emit(&format!("output: {output}"));
                host.emit(&counter);
            }
            SessionCommand::Help => controller.host_mut().emit(SESSION_HELP),
            SessionCommand::Quit => break,
            SessionCommand::Unknown(name) => controller
                .host_mut()
                .emit(&format!("unknown command :{name}, try :help")),
        }

        if let Some(e) = controller.host_mut().take_io_error() {
            return Err(e.into());
        }
    }

    let mut out = controller.into_host().into_inner();
    out.flush()?;
    Ok(out)
}
