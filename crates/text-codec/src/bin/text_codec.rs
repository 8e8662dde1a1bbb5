//! `text-codec` — encode text to Base64 or decode it back.
//!
//! Usage:
//!   text-codec encode [TEXT]
//!   text-codec decode [TEXT]
//!   text-codec interactive
//!
//! Without TEXT the input is read from stdin. Logging goes to stderr and
//! is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read};

use text_codec::cli::{
    parse_args, run_interactive, run_once, strip_line_ending, CliError, Command, USAGE,
};
use text_codec::TextCodec;
use tracing_subscriber::EnvFilter;

fn run() -> Result<i32, CliError> {
    let invocation = parse_args(std::env::args().skip(1))?;
    let codec = TextCodec::new();

    match invocation.command {
        Command::Help => {
            println!("{USAGE}");
            Ok(0)
        }
        Command::Run { mode, ref text } => {
            let messages = invocation.messages()?;
            let input = match text {
                Some(text) => text.clone(),
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    strip_line_ending(&buf).to_string()
                }
            };
            Ok(run_once(
                codec,
                &messages,
                mode,
                &input,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?)
        }
        Command::Interactive => {
            let messages = invocation.messages()?;
            let _out = run_interactive(codec, messages, io::stdin().lock(), io::stdout().lock())?;
            Ok(0)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, CliError::Usage(_)) {
                eprintln!("\n{USAGE}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
