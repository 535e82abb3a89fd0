use crate::{
    ast::{Expr, NodeId, VarKind},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Resolution},
        value::{
            core::context_of,
            number::{NumKind, Number},
        },
    },
};

impl Context<'_> {
    /// Resolves an identifier node to a symbol table slot.
    ///
    /// The first evaluation of a node looks the name up and caches the
    /// outcome, whether the variable exists or not. Later evaluations of the
    /// same node reuse the cached outcome and never look the name up again, so
    /// a node that first ran before its variable was assigned stays
    /// unresolved.
    pub(crate) fn resolve(&mut self, name: &str, id: NodeId) -> Option<usize> {
        let resolution = if let Some(&cached) = self.resolutions.get(&id) {
            cached
        } else {
            let found = self.symbols.slot_of(name);
            tracing::trace!(name, ?found, "resolved identifier");
            let resolution = found.map_or(Resolution::Missing, Resolution::Slot);
            self.resolutions.insert(id, resolution);
            resolution
        };
        match resolution {
            Resolution::Slot(slot) => Some(slot),
            Resolution::Missing => None,
        }
    }

    /// Chooses the numeric context for an expression.
    ///
    /// The context is the widest kind found among its leaves: float and
    /// double literals, and variables by their recorded kind. Everything else,
    /// including unknown variables, counts as integer.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         evaluator::core::Context, host::CaptureHost, settings::Settings,
    ///         value::number::NumKind,
    ///     },
    /// };
    ///
    /// let mut host = CaptureHost::default();
    /// let mut ctx = Context::new(&mut host, Settings::default());
    ///
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::IntLiteral { value: 1, line: 1 },
    ///                         Expr::FloatLiteral { value: 0.5, line: 1 },
    ///                         1);
    /// assert_eq!(ctx.infer_kind(&expr), NumKind::Float);
    /// ```
    pub fn infer_kind(&mut self, expr: &Expr) -> NumKind {
        match expr {
            Expr::FloatLiteral { .. } => NumKind::Float,
            Expr::DoubleLiteral { .. } => NumKind::Double,
            Expr::Identifier { name, id, .. } => self.resolve(name, *id)
                                                     .and_then(|slot| self.symbols.slot(slot))
                                                     .map_or(NumKind::Int, |var| context_of(var.kind)),
            Expr::BinaryOp { left, right, .. } => {
                let left = self.infer_kind(left);
                left.widen(self.infer_kind(right))
            },
            Expr::UnaryOp { operand, .. } => self.infer_kind(operand),
            _ => NumKind::Int,
        }
    }

    /// Reads a variable in the given context.
    ///
    /// An unknown variable is fatal in the integer context. In the float and
    /// double contexts it is reported and reads as zero.
    pub(crate) fn eval_identifier(&mut self,
                                  name: &str,
                                  id: NodeId,
                                  line: usize,
                                  kind: NumKind)
                                  -> EvalResult<Number> {
        let Some(number) = self.resolve(name, id)
                               .and_then(|slot| self.symbols.slot(slot))
                               .map(|var| var.value.as_number())
        else {
            let error = RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                        line };
            if kind == NumKind::Int {
                return Err(error);
            }
            self.report(error);
            return Ok(Number::zero(kind));
        };

        if kind == NumKind::Int && number.kind() != NumKind::Int {
            self.report(RuntimeError::TypeMisuse { details: format!("Cannot use {} variable '{name}' in an integer expression",
                                                                    number.kind()),
                                                   line });
        }
        Ok(number.convert(kind))
    }

    /// Storage size in bytes of a variable's kind.
    ///
    /// An unknown name is reported and measures zero.
    pub(crate) fn eval_sizeof(&mut self, name: &str, line: usize) -> i32 {
        if let Some(variable) = self.symbols.lookup(name) {
            return size_of_kind(variable.kind);
        }
        self.report(RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                    line });
        0
    }

    /// Tests whether an expression is unsigned without evaluating it.
    ///
    /// Identifiers are unsigned when their variable carries the `unsigned`
    /// qualifier; binary operations when their declaration did.
    pub(crate) fn is_statically_unsigned(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Identifier { name, .. } => self.symbols.qualifiers_of(name).is_unsigned,
            Expr::BinaryOp { qualifiers, .. } => qualifiers.is_unsigned,
            _ => false,
        }
    }

    /// Tests whether an expression is a boolean literal or a `bool` variable.
    pub(crate) fn is_boolean(&self, expr: &Expr) -> bool {
        match expr {
            Expr::BoolLiteral { .. } => true,
            Expr::Identifier { name, .. } => self.symbols
                                                 .lookup(name)
                                                 .is_some_and(|var| var.kind == VarKind::Bool),
            _ => false,
        }
    }
}

/// Byte size reported by `sizeof` for each kind.
///
/// ## Example
/// ```
/// use brainrot::{ast::VarKind, interpreter::evaluator::utils::size_of_kind};
///
/// assert_eq!(size_of_kind(VarKind::Double), 8);
/// assert_eq!(size_of_kind(VarKind::Bool), 1);
/// ```
#[must_use]
pub const fn size_of_kind(kind: VarKind) -> i32 {
    match kind {
        VarKind::Int | VarKind::Float => 4,
        VarKind::Double => 8,
        VarKind::Bool | VarKind::Char => 1,
    }
}
