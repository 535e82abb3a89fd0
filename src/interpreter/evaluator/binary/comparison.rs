use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::Context,
        value::number::Number,
    },
    util::num::{Real, approx_eq, approx_ge, approx_gt, approx_le, approx_lt},
};

/// Applies a relational or equality operator to two floating-point values
/// with a tolerance of one epsilon of their precision.
fn compare_real<T: Real>(op: BinaryOperator, left: T, right: T) -> bool {
    match op {
        BinaryOperator::Less => approx_lt(left, right),
        BinaryOperator::Greater => approx_gt(left, right),
        BinaryOperator::LessEqual => approx_le(left, right),
        BinaryOperator::GreaterEqual => approx_ge(left, right),
        BinaryOperator::Equal => approx_eq(left, right),
        BinaryOperator::NotEqual => !approx_eq(left, right),
        _ => false,
    }
}

impl Context<'_> {
    /// Evaluates a comparison of two numbers of the same context.
    ///
    /// Integers compare exactly. Floats and doubles use the tolerant
    /// comparisons, so `0.1 + 0.2 == 0.3` holds. The result is `1` or `0` in
    /// the context of the operands.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::number::Number},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::LessEqual,
    ///                                       Number::Double(1.0),
    ///                                       Number::Double(1.0 + 1e-17));
    /// assert_eq!(result, Number::Double(1.0));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, left: Number, right: Number) -> Number {
        let kind = left.kind().widen(right.kind());
        let holds = match (left.convert(kind), right.convert(kind)) {
            (Number::Int(a), Number::Int(b)) => match op {
                BinaryOperator::Less => a < b,
                BinaryOperator::Greater => a > b,
                BinaryOperator::LessEqual => a <= b,
                BinaryOperator::GreaterEqual => a >= b,
                BinaryOperator::Equal => a == b,
                BinaryOperator::NotEqual => a != b,
                _ => false,
            },
            (Number::Float(a), Number::Float(b)) => compare_real(op, a, b),
            (a, b) => compare_real(op, a.as_f64(), b.as_f64()),
        };
        Number::from_bool(holds, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::number::NumKind;

    #[test]
    fn float_equality_uses_single_precision_tolerance() {
        let a = Number::Float(0.1 + 0.2);
        let b = Number::Float(0.3);
        assert_eq!(Context::eval_comparison(BinaryOperator::Equal, a, b), Number::Float(1.0));
        assert_eq!(Context::eval_comparison(BinaryOperator::NotEqual, a, b),
                   Number::Float(0.0));
    }

    #[test]
    fn integer_comparison_is_exact() {
        let result = Context::eval_comparison(BinaryOperator::Less, Number::Int(2), Number::Int(2));
        assert_eq!(result, Number::from_bool(false, NumKind::Int));
    }
}
