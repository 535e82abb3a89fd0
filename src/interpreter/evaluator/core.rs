use std::collections::HashMap;

use crate::{
    ast::{Expr, NodeId, Statement},
    error::RuntimeError,
    interpreter::{
        host::Host,
        settings::Settings,
        symbols::SymbolTable,
        value::number::{NumKind, Number},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` that stops the program. Errors that do not stop the program
/// go through [`Context::report`] instead.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What happened when a statement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Completed,
    /// A `break` is travelling outward to the nearest loop or switch.
    Break {
        /// Line of the `break` statement.
        line: usize,
    },
}

/// Outcome of the first lookup of an identifier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// The variable lives in this slot of the symbol table.
    Slot(usize),
    /// The variable did not exist when the node was first evaluated.
    Missing,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global symbol table, the
/// per-node resolution cache, the runtime settings and the host that receives
/// every observable effect.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::run`] executes a
/// whole program; [`Context::execute`] and [`Context::evaluate`] work on
/// single nodes.
///
/// ## Example
/// ```
/// use brainrot::{
///     ast::Expr,
///     interpreter::{evaluator::core::Context, host::CaptureHost, settings::Settings},
/// };
///
/// let mut host = CaptureHost::default();
/// let mut ctx = Context::new(&mut host, Settings::default());
///
/// let expr = Expr::binary(brainrot::ast::BinaryOperator::Mul,
///                         Expr::IntLiteral { value: 6, line: 1 },
///                         Expr::IntLiteral { value: 7, line: 1 },
///                         1);
/// assert_eq!(ctx.evaluate(&expr).unwrap(), 42);
/// ```
pub struct Context<'h> {
    /// Every variable the program has assigned.
    pub symbols:              SymbolTable,
    pub(crate) resolutions:   HashMap<NodeId, Resolution>,
    pub(crate) settings:      Settings,
    pub(crate) host:          &'h mut dyn Host,
}

impl<'h> Context<'h> {
    /// Creates an evaluation context with an empty symbol table.
    pub fn new(host: &'h mut dyn Host, settings: Settings) -> Self {
        let symbols = settings.symbol_capacity
                              .map_or_else(SymbolTable::new, SymbolTable::with_capacity_limit);
        Self { symbols,
               resolutions: HashMap::new(),
               settings,
               host }
    }

    /// Runs a whole program.
    ///
    /// A `break` that escapes every loop and switch becomes
    /// [`RuntimeError::StrayBreak`]. The line of a returned error is already
    /// adjusted by the configured line offset.
    ///
    /// # Errors
    /// Returns the first error that stops the program, including
    /// [`RuntimeError::Terminated`] after `ragequit`.
    pub fn run(&mut self, program: &Statement) -> EvalResult<()> {
        let offset = self.settings.line_offset;
        match self.execute(program) {
            Ok(Flow::Completed) => Ok(()),
            Ok(Flow::Break { line }) => Err(RuntimeError::StrayBreak { line }.shifted(offset)),
            Err(e) => Err(e.shifted(offset)),
        }
    }

    /// Reports an error that does not stop the program.
    ///
    /// The line is adjusted by the configured offset, the message goes to the
    /// host and the event is logged. Execution continues with whatever
    /// substitute value the caller chooses.
    pub fn report(&mut self, error: RuntimeError) {
        let error = error.shifted(self.settings.line_offset);
        tracing::warn!(%error, "runtime diagnostic");
        self.host.diagnostic(&error.to_string());
    }

    /// Evaluates an expression to an integer.
    ///
    /// The context is chosen by kind inference, the expression is computed in
    /// that context and the result is truncated toward zero. This is the
    /// entry point conditions, selectors and print operands use.
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
    /// let expr = Expr::DoubleLiteral { value: 2.9, line: 1 };
    /// assert_eq!(ctx.evaluate(&expr).unwrap(), 2);
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<i32> {
        let kind = self.infer_kind(expr);
        Ok(self.eval_in(expr, kind)?.truncate())
    }

    /// Evaluates an expression in the given numeric context.
    ///
    /// Every sub-expression is computed in the same context. Literals convert
    /// into it; the exceptions are float literals in the integer context, and
    /// strings or calls anywhere, which are reported as type misuse.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `kind`: The numeric context.
    ///
    /// # Returns
    /// A [`Number`] of variant `kind`.
    pub fn eval_in(&mut self, expr: &Expr, kind: NumKind) -> EvalResult<Number> {
        match expr {
            Expr::IntLiteral { value, .. } => Ok(Number::Int(*value).convert(kind)),
            Expr::CharLiteral { value, .. } => Ok(Number::Int(i32::from(*value)).convert(kind)),
            Expr::BoolLiteral { value, .. } => Ok(Number::from_bool(*value, kind)),
            Expr::FloatLiteral { value, line } => {
                Ok(self.eval_real_literal(Number::Float(*value), kind, *line))
            },
            Expr::DoubleLiteral { value, line } => {
                Ok(self.eval_real_literal(Number::Double(*value), kind, *line))
            },
            Expr::StringLiteral { line, .. } => {
                self.report(RuntimeError::TypeMisuse { details: "Cannot use a string in a numeric expression".into(),
                                                       line:    *line, });
                Ok(Number::zero(kind))
            },
            Expr::Identifier { name, id, line } => self.eval_identifier(name, *id, *line, kind),
            Expr::BinaryOp { op,
                             left,
                             right,
                             qualifiers,
                             line, } => self.eval_binary_op(*op, left, right, *qualifiers, *line, kind),
            Expr::UnaryOp { op, operand, line } => self.eval_unary_op(*op, operand, *line, kind),
            Expr::Call { name, line, .. } => {
                self.report(RuntimeError::TypeMisuse { details: format!("Call to '{name}' cannot be used as a value"),
                                                       line:    *line, });
                Ok(Number::zero(kind))
            },
            Expr::Sizeof { name, line } => Ok(Number::Int(self.eval_sizeof(name, *line)).convert(kind)),
        }
    }

    /// A float or double literal read in `kind`.
    ///
    /// Reading one in the integer context is reported and the value
    /// truncated.
    fn eval_real_literal(&mut self, number: Number, kind: NumKind, line: usize) -> Number {
        if kind == NumKind::Int {
            self.report(RuntimeError::TypeMisuse { details: format!("Cannot use a {} literal in an integer expression",
                                                                    number.kind()),
                                                   line });
        }
        number.convert(kind)
    }
}
