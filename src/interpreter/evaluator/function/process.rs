use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::first_argument,
        },
        value::number::NumKind,
    },
};

/// `ragequit(code)`: terminates the program.
///
/// The host receives the exit code first; the call then unwinds the program
/// with [`RuntimeError::Terminated`].
///
/// # Errors
/// Always. The code must be an integer literal, otherwise the call is
/// malformed.
///
/// # Example
/// ```
/// use brainrot::{
///     ast::Expr,
///     error::RuntimeError,
///     interpreter::{
///         evaluator::{core::Context, function::process::ragequit},
///         host::CaptureHost,
///         settings::Settings,
///     },
/// };
///
/// let mut host = CaptureHost::default();
/// let mut ctx = Context::new(&mut host, Settings::default());
///
/// let code = Expr::IntLiteral { value: 3, line: 1 };
/// assert_eq!(ragequit(&mut ctx, &[code], 1), Err(RuntimeError::Terminated { code: 3 }));
/// drop(ctx);
/// assert_eq!(host.exit_codes, vec![3]);
/// ```
pub fn ragequit(ctx: &mut Context<'_>, args: &[Expr], line: usize) -> EvalResult<()> {
    let Expr::IntLiteral { value: code, .. } = *first_argument(args, "ragequit", line)? else {
        return Err(RuntimeError::MalformedCall { name: "ragequit".into(),
                                                 details: "First argument to ragequit must be an integer literal".into(),
                                                 line });
    };

    tracing::info!(code, line, "ragequit");
    ctx.host.ragequit(code);
    Err(RuntimeError::Terminated { code })
}

/// `chill(seconds)`: suspends execution.
///
/// Accepts a non-negative integer literal or a statically unsigned
/// expression.
///
/// # Errors
/// Any other argument is a malformed call.
#[allow(clippy::cast_sign_loss)]
pub fn chill(ctx: &mut Context<'_>, args: &[Expr], line: usize) -> EvalResult<()> {
    let seconds = match first_argument(args, "chill", line)? {
        Expr::IntLiteral { value, .. } if *value >= 0 => *value as u32,
        expr if ctx.is_statically_unsigned(expr) => ctx.eval_in(expr, NumKind::Int)?.truncate() as u32,
        _ => {
            return Err(RuntimeError::MalformedCall { name: "chill".into(),
                                                     details: "First argument to chill must be an unsigned integer".into(),
                                                     line });
        },
    };

    ctx.host.chill(seconds);
    Ok(())
}
