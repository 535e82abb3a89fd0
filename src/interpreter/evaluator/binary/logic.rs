use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::number::Number},
};

impl Context<'_> {
    /// Evaluates logical AND or OR on two already evaluated operands.
    ///
    /// There is no short-circuit: both sides were computed before this is
    /// called. The result is `1` or `0` in the operands' context.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::number::Number},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, Number::Int(0), Number::Int(7));
    /// assert_eq!(result, Number::Int(1));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: Number, right: Number) -> Number {
        let holds = match op {
            BinaryOperator::And => left.is_truthy() && right.is_truthy(),
            BinaryOperator::Or => left.is_truthy() || right.is_truthy(),
            _ => false,
        };
        Number::from_bool(holds, left.kind().widen(right.kind()))
    }
}
