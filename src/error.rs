/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, unterminated constructs and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program.
/// Whether an error is fatal or only reported is decided where it is raised.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that stops a program: it either failed to parse or stopped while
/// running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution stopped.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The exit code requested by `ragequit`, if that is what stopped the
    /// program.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Runtime(RuntimeError::Terminated { code }) => Some(*code),
            _ => None,
        }
    }
}
