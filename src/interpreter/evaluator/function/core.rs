use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::{print, process},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, the unevaluated argument
/// expressions and the line number of the call. Handlers evaluate arguments
/// themselves because most of them inspect the argument's shape first.
type BuiltinFn = fn(&mut Context<'_>, &[Expr], usize) -> EvalResult<()>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Any` accepts every argument count, including none.
/// - `AtLeast(n)` requires `n` or more arguments; extra arguments are ignored
///   by the handlers.
#[derive(Clone, Copy)]
enum Arity {
    Any,
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "yapping"  => { arity: Arity::AtLeast(1), func: print::yapping },
    "yappin"   => { arity: Arity::AtLeast(1), func: print::yappin },
    "baka"     => { arity: Arity::Any,        func: print::baka },
    "ragequit" => { arity: Arity::AtLeast(1), func: process::ragequit },
    "chill"    => { arity: Arity::AtLeast(1), func: process::chill },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl Context<'_> {
    /// Dispatches a call statement to its built-in.
    ///
    /// A call to a name that is not a built-in is reported and skipped. A
    /// call with too few arguments stops the program.
    ///
    /// # Parameters
    /// - `name`: Built-in name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// [`RuntimeError::MalformedCall`] for a missing argument, any error the
    /// handler raises, and [`RuntimeError::Terminated`] from `ragequit`.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, host::CaptureHost, settings::Settings},
    /// };
    ///
    /// let mut host = CaptureHost::default();
    /// let mut ctx = Context::new(&mut host, Settings::default());
    ///
    /// let format = Expr::StringLiteral { value: "%d\n".into(),
    ///                                    line:  1, };
    /// let value = Expr::IntLiteral { value: 42, line: 1 };
    /// ctx.call_builtin("yapping", &[format, value], 1).unwrap();
    /// assert!(ctx.call_builtin("yapping", &[], 2).is_err());
    /// drop(ctx);
    /// assert_eq!(host.stdout(), "42\n");
    /// ```
    pub fn call_builtin(&mut self, name: &str, arguments: &[Expr], line: usize) -> EvalResult<()> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            self.report(RuntimeError::MalformedCall { name: name.to_string(),
                                                      details: format!("Unknown function '{name}'"),
                                                      line });
            return Ok(());
        };

        if !builtin.arity.check(arguments.len()) {
            return Err(missing_arguments(name, line));
        }

        tracing::trace!(name, arguments = arguments.len(), line, "builtin call");
        (builtin.func)(self, arguments, line)
    }
}

/// Returns the text of a string literal argument.
pub(super) fn string_literal(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::StringLiteral { value, .. } => Some(value),
        _ => None,
    }
}

/// Returns the first argument of a built-in call.
///
/// # Errors
/// `MalformedCall` if the call has no arguments.
pub(super) fn first_argument<'e>(args: &'e [Expr], name: &str, line: usize) -> EvalResult<&'e Expr> {
    args.first().ok_or_else(|| missing_arguments(name, line))
}

fn missing_arguments(name: &str, line: usize) -> RuntimeError {
    RuntimeError::MalformedCall { name: name.to_string(),
                                  details: format!("No arguments provided for {name} function call"),
                                  line }
}
