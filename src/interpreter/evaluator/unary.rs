use crate::{
    ast::{Expr, Qualifiers, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            number::{NumKind, Number},
        },
    },
};

impl Context<'_> {
    /// Evaluates a unary operation in the given context.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation; wraps at `i32::MIN` in the integer
    ///   context.
    /// - `PreIncrement` / `PreDecrement`: step the variable by one, store it
    ///   and yield the new value.
    /// - `PostIncrement` / `PostDecrement`: step the variable by one, store it
    ///   and yield the old value.
    ///
    /// The stepped value is written back with the variable's own kind and
    /// qualifiers, so `i++` inside a double expression leaves `i` an `int`.
    ///
    /// # Errors
    /// The mutating operators require a variable operand; anything else is a
    /// fatal [`RuntimeError::TypeMisuse`].
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         host::CaptureHost,
    ///         settings::Settings,
    ///         value::number::{NumKind, Number},
    ///     },
    /// };
    ///
    /// let mut host = CaptureHost::default();
    /// let mut ctx = Context::new(&mut host, Settings::default());
    ///
    /// let five = Expr::IntLiteral { value: 5, line: 1 };
    /// let v = ctx.eval_unary_op(UnaryOperator::Negate, &five, 1, NumKind::Int).unwrap();
    /// assert_eq!(v, Number::Int(-5));
    ///
    /// // Only variables can be incremented.
    /// assert!(ctx.eval_unary_op(UnaryOperator::PreIncrement, &five, 1, NumKind::Int).is_err());
    /// ```
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         operand: &Expr,
                         line: usize,
                         kind: NumKind)
                         -> EvalResult<Number> {
        if !op.mutates() {
            return Ok(self.eval_in(operand, kind)?.negate());
        }

        let Expr::Identifier { name, .. } = operand else {
            return Err(RuntimeError::TypeMisuse { details: format!("Operator '{op}' requires a variable operand"),
                                                  line });
        };

        let old = self.eval_in(operand, kind)?;
        let new = match op {
            UnaryOperator::PreIncrement | UnaryOperator::PostIncrement => old.step(1),
            _ => old.step(-1),
        };
        self.write_back(name, new, line);

        match op {
            UnaryOperator::PreIncrement | UnaryOperator::PreDecrement => Ok(new),
            _ => Ok(old),
        }
    }

    /// Stores a stepped value under the variable's existing kind and
    /// qualifiers. A variable that does not exist yet takes the kind of the
    /// context it was stepped in.
    fn write_back(&mut self, name: &str, number: Number, line: usize) {
        let (kind, qualifiers) = self.symbols
                                     .lookup(name)
                                     .map_or_else(|| (Self::kind_for(number.kind()), Qualifiers::NONE),
                                                  |var| (var.kind, var.qualifiers));
        self.store(name, kind, qualifiers, Value::from_number(number, kind), line);
    }
}
