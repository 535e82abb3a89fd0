use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crate::interpreter::format::{FormatArg, render, render_bytes};

/// The primitives a program can reach through its built-in calls.
///
/// The interpreter never touches the standard streams or the process directly;
/// every observable effect goes through this trait. [`StdHost`] wires it to the
/// real process, [`CaptureHost`] records everything for inspection.
pub trait Host {
    /// Formatted write to standard output (`yapping`).
    fn yapping(&mut self, format: &str, arg: Option<FormatArg>);

    /// Formatted write to the alternate output stream (`yappin`).
    fn yappin(&mut self, format: &str, arg: Option<FormatArg>);

    /// Formatted write to the error stream (`baka`).
    fn baka(&mut self, format: &str, arg: Option<FormatArg>);

    /// Terminates the program with an exit code (`ragequit`).
    ///
    /// Implementations may return; the interpreter unwinds with
    /// `RuntimeError::Terminated` afterwards either way.
    fn ragequit(&mut self, code: i32);

    /// Suspends execution for a number of seconds (`chill`).
    fn chill(&mut self, seconds: u32);

    /// Receives a rendered diagnostic for an error that does not stop the
    /// program.
    fn diagnostic(&mut self, message: &str);
}

/// A host bound to the real process: standard streams, `exit` and `sleep`.
#[derive(Debug, Default)]
pub struct StdHost;

impl StdHost {
    fn write_to(stream: &mut impl Write, bytes: &[u8], flush: bool) {
        if let Err(e) = stream.write_all(bytes) {
            tracing::error!("failed to write program output: {e}");
            return;
        }
        if flush && let Err(e) = stream.flush() {
            tracing::error!("failed to flush program output: {e}");
        }
    }
}

impl Host for StdHost {
    fn yapping(&mut self, format: &str, arg: Option<FormatArg>) {
        Self::write_to(&mut io::stdout().lock(), &render_bytes(format, arg.as_ref()), false);
    }

    fn yappin(&mut self, format: &str, arg: Option<FormatArg>) {
        Self::write_to(&mut io::stdout().lock(), &render_bytes(format, arg.as_ref()), true);
    }

    fn baka(&mut self, format: &str, arg: Option<FormatArg>) {
        Self::write_to(&mut io::stderr().lock(), &render_bytes(format, arg.as_ref()), true);
    }

    fn ragequit(&mut self, code: i32) {
        tracing::debug!(code, "ragequit");
        if let Err(e) = io::stdout().flush() {
            tracing::error!("failed to flush program output: {e}");
        }
        std::process::exit(code);
    }

    fn chill(&mut self, seconds: u32) {
        tracing::debug!(seconds, "chill");
        thread::sleep(Duration::from_secs(u64::from(seconds)));
    }

    fn diagnostic(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// The output streams a [`CaptureHost`] tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// `yapping`
    Stdout,
    /// `yappin`
    Alternate,
    /// `baka`
    Error,
}

/// One recorded call to an output primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Which primitive was called.
    pub stream: Stream,
    /// The format string exactly as passed.
    pub format: String,
    /// The argument exactly as passed.
    pub arg:    Option<FormatArg>,
    /// The rendered text.
    pub text:   String,
}

/// A host that records every call instead of performing it.
///
/// `ragequit` and `chill` return immediately, so tests can run programs that
/// terminate or sleep.
///
/// ## Example
/// ```
/// use brainrot::{
///     interpreter::{format::FormatArg, host::{CaptureHost, Host}},
/// };
///
/// let mut host = CaptureHost::default();
/// host.yapping("%d\n", Some(FormatArg::Int(3)));
/// assert_eq!(host.stdout(), "3\n");
/// ```
#[derive(Debug, Default)]
pub struct CaptureHost {
    /// Every output call in order.
    pub writes:      Vec<Output>,
    /// Exit codes passed to `ragequit`.
    pub exit_codes:  Vec<i32>,
    /// Durations passed to `chill`.
    pub sleeps:      Vec<u32>,
    /// Rendered diagnostics.
    pub diagnostics: Vec<String>,
}

impl CaptureHost {
    fn record(&mut self, stream: Stream, format: &str, arg: Option<FormatArg>) {
        let text = render(format, arg.as_ref());
        self.writes.push(Output { stream,
                                  format: format.to_string(),
                                  arg,
                                  text });
    }

    /// Concatenated text written to one stream.
    #[must_use]
    pub fn text_of(&self, stream: Stream) -> String {
        self.writes
            .iter()
            .filter(|w| w.stream == stream)
            .map(|w| w.text.as_str())
            .collect()
    }

    /// Concatenated text written by `yapping`.
    #[must_use]
    pub fn stdout(&self) -> String {
        self.text_of(Stream::Stdout)
    }

    /// The recorded calls to one stream.
    pub fn writes_to(&self, stream: Stream) -> impl Iterator<Item = &Output> {
        self.writes.iter().filter(move |w| w.stream == stream)
    }
}

impl Host for CaptureHost {
    fn yapping(&mut self, format: &str, arg: Option<FormatArg>) {
        self.record(Stream::Stdout, format, arg);
    }

    fn yappin(&mut self, format: &str, arg: Option<FormatArg>) {
        self.record(Stream::Alternate, format, arg);
    }

    fn baka(&mut self, format: &str, arg: Option<FormatArg>) {
        self.record(Stream::Error, format, arg);
    }

    fn ragequit(&mut self, code: i32) {
        self.exit_codes.push(code);
    }

    fn chill(&mut self, seconds: u32) {
        self.sleeps.push(seconds);
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}
