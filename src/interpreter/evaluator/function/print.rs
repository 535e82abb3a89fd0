use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::{first_argument, string_literal},
        },
        format::FormatArg,
        value::number::NumKind,
    },
};

/// Which output primitive a formatted write goes to.
#[derive(Clone, Copy)]
enum Target {
    Yapping,
    Yappin,
}

impl Context<'_> {
    fn emit(&mut self, target: Target, format: &str, arg: Option<FormatArg>) {
        match target {
            Target::Yapping => self.host.yapping(format, arg),
            Target::Yappin => self.host.yappin(format, arg),
        }
    }

    /// Writes the value argument with the format it was routed to.
    ///
    /// Floats and doubles keep their precision. Integers are written signed,
    /// unless the expression is statically unsigned: then `%lu` and `%u`
    /// receive an unsigned value and any other format is replaced by `%u`.
    #[allow(clippy::cast_sign_loss)]
    fn emit_number(&mut self, target: Target, format: &str, expr: &Expr) -> EvalResult<()> {
        match self.infer_kind(expr) {
            NumKind::Float => {
                let value = self.eval_in(expr, NumKind::Float)?.as_f32();
                self.emit(target, format, Some(FormatArg::Float(value)));
            },
            NumKind::Double => {
                let value = self.eval_in(expr, NumKind::Double)?.as_f64();
                self.emit(target, format, Some(FormatArg::Double(value)));
            },
            NumKind::Int if self.is_statically_unsigned(expr) => {
                let value = self.eval_in(expr, NumKind::Int)?.truncate() as u32;
                if format.contains("%lu") {
                    self.emit(target, format, Some(FormatArg::UnsignedLong(u64::from(value))));
                } else if format.contains("%u") {
                    self.emit(target, format, Some(FormatArg::Unsigned(value)));
                } else {
                    self.emit(target, "%u", Some(FormatArg::Unsigned(value)));
                }
            },
            NumKind::Int => {
                let value = self.eval_in(expr, NumKind::Int)?.truncate();
                self.emit(target, format, Some(FormatArg::Int(value)));
            },
        }
        Ok(())
    }
}

/// `yapping(format[, value])`: formatted write to standard output.
///
/// The format must be a string literal; otherwise the call is reported and
/// skipped. Without a value the format is written verbatim. A `%b` in the
/// format prints the value as `W` (truthy) or `L`.
///
/// # Example
/// ```
/// use brainrot::{
///     ast::Expr,
///     interpreter::{
///         evaluator::{core::Context, function::print::yapping},
///         host::CaptureHost,
///         settings::Settings,
///     },
/// };
///
/// let mut host = CaptureHost::default();
/// let mut ctx = Context::new(&mut host, Settings::default());
///
/// let format = Expr::StringLiteral { value: "win: %b\n".into(),
///                                    line:  1, };
/// let flag = Expr::BoolLiteral { value: true, line: 1 };
/// yapping(&mut ctx, &[format, flag], 1).unwrap();
/// drop(ctx);
/// assert_eq!(host.stdout(), "win: W\n");
/// ```
pub fn yapping(ctx: &mut Context<'_>, args: &[Expr], line: usize) -> EvalResult<()> {
    let Some(format) = string_literal(first_argument(args, "yapping", line)?) else {
        ctx.report(RuntimeError::MalformedCall { name: "yapping".into(),
                                                 details: "First argument to yapping must be a string literal".into(),
                                                 line });
        return Ok(());
    };

    let Some(expr) = args.get(1) else {
        ctx.host.yapping("%s", Some(FormatArg::Str(format.to_string())));
        return Ok(());
    };

    if ctx.infer_kind(expr) == NumKind::Int && format.contains("%b") {
        let truthy = ctx.eval_in(expr, NumKind::Int)?.is_truthy();
        let format = format.replacen("%b", "%s", 1);
        ctx.host.yapping(&format, Some(FormatArg::Str(win_or_loss(truthy).to_string())));
        return Ok(());
    }

    ctx.emit_number(Target::Yapping, format, expr)
}

/// `yappin(format[, value])`: formatted write to the alternate stream.
///
/// A boolean value is written as `W` or `L`, or as `1` or `0` when the format
/// contains `%d`.
///
/// # Errors
/// A format that is not a string literal stops the program.
pub fn yappin(ctx: &mut Context<'_>, args: &[Expr], line: usize) -> EvalResult<()> {
    let Some(format) = string_literal(first_argument(args, "yappin", line)?) else {
        return Err(RuntimeError::MalformedCall { name: "yappin".into(),
                                                 details: "First argument to yappin must be a string literal".into(),
                                                 line });
    };

    let Some(expr) = args.get(1) else {
        ctx.host.yappin("%s", Some(FormatArg::Str(format.to_string())));
        return Ok(());
    };

    if ctx.is_boolean(expr) {
        let value = ctx.eval_in(expr, NumKind::Int)?.truncate();
        if format.contains("%d") {
            ctx.host.yappin(format, Some(FormatArg::Int(value)));
        } else {
            ctx.host.yappin(win_or_loss(value != 0), None);
        }
        return Ok(());
    }

    ctx.emit_number(Target::Yappin, format, expr)
}

/// `baka()`: writes a newline to the error stream.
///
/// Formatted error output is not supported; a call with arguments only logs a
/// warning.
pub fn baka(ctx: &mut Context<'_>, args: &[Expr], line: usize) -> EvalResult<()> {
    if args.is_empty() {
        ctx.host.baka("\n", None);
    } else {
        tracing::warn!(line, arguments = args.len(), "baka with arguments is not supported; call ignored");
    }
    Ok(())
}

const fn win_or_loss(truthy: bool) -> &'static str {
    if truthy { "W" } else { "L" }
}
