use thiserror::Error;

/// Represents all errors that can occur during execution.
///
/// The same variant may be fatal in one place and merely reported in another:
/// an undefined variable stops an integer evaluation but only produces a
/// diagnostic inside a float or double evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was used in a context that forbids its kind.
    #[error("Error on line {line}: {details}.")]
    TypeMisuse {
        /// Details about the misuse.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A float or double value was too large for its integer destination.
    #[error("Error on line {line}: Float to int conversion overflow.")]
    NarrowingOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A built-in was called with the wrong arity or argument kind.
    #[error("Error on line {line}: {details}.")]
    MalformedCall {
        /// The name of the called built-in.
        name:    String,
        /// Details about why the call is malformed.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The symbol table reached its configured capacity.
    #[error("Error on line {line}: Failed to set variable '{name}': symbol table is full ({capacity} entries).")]
    CapacityExceeded {
        /// The variable that could not be stored.
        name:     String,
        /// The configured capacity.
        capacity: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A `break` escaped every loop and switch.
    #[error("Error on line {line}: 'break' outside of a loop or switch.")]
    StrayBreak {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program asked to terminate with an exit code.
    #[error("Program terminated with exit code {code}.")]
    Terminated {
        /// The requested exit code.
        code: i32,
    },
}

impl RuntimeError {
    /// Returns the same error with its line moved back by `offset`.
    ///
    /// ## Example
    /// ```
    /// use brainrot::error::RuntimeError;
    ///
    /// let err = RuntimeError::DivisionByZero { line: 7 };
    /// assert_eq!(err.shifted(2), RuntimeError::DivisionByZero { line: 5 });
    /// ```
    #[must_use]
    pub fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UndefinedSymbol { line, .. }
            | Self::TypeMisuse { line, .. }
            | Self::DivisionByZero { line }
            | Self::NarrowingOverflow { line }
            | Self::MalformedCall { line, .. }
            | Self::CapacityExceeded { line, .. }
            | Self::StrayBreak { line } => *line = line.saturating_sub(offset),
            Self::Terminated { .. } => {},
        }
        self
    }
}
