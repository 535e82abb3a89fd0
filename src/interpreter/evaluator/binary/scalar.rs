use crate::{
    ast::{BinaryOperator, Qualifiers},
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::number::Number},
    util::num::{Real, guarded_div},
};

impl Context<'_> {
    /// Applies an arithmetic operator to two numbers of the same context.
    ///
    /// Integer arithmetic wraps on overflow. Integer division or modulo by
    /// zero is reported and yields `0`. Float and double division go through
    /// [`guarded_div`]; `%` on floats or doubles is reported and yields `0`.
    ///
    /// Operands of different contexts are widened first; the evaluator never
    /// produces them, but the operation stays total.
    pub(crate) fn eval_arithmetic(&mut self,
                                  op: BinaryOperator,
                                  left: Number,
                                  right: Number,
                                  qualifiers: Qualifiers,
                                  line: usize)
                                  -> Number {
        let kind = left.kind().widen(right.kind());
        match (left.convert(kind), right.convert(kind)) {
            (Number::Int(a), Number::Int(b)) => {
                Number::Int(self.eval_int_arithmetic(op, a, b, qualifiers.is_unsigned, line))
            },
            (Number::Float(a), Number::Float(b)) => Number::Float(self.eval_real_arithmetic(op, a, b, line)),
            (a, b) => Number::Double(self.eval_real_arithmetic(op, a.as_f64(), b.as_f64(), line)),
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn eval_int_arithmetic(&mut self,
                           op: BinaryOperator,
                           left: i32,
                           right: i32,
                           unsigned: bool,
                           line: usize)
                           -> i32 {
        match op {
            BinaryOperator::Add => left.wrapping_add(right),
            BinaryOperator::Sub => left.wrapping_sub(right),
            BinaryOperator::Mul => left.wrapping_mul(right),
            BinaryOperator::Div | BinaryOperator::Mod if right == 0 => {
                self.report(RuntimeError::DivisionByZero { line });
                0
            },
            BinaryOperator::Div => left.wrapping_div(right),
            BinaryOperator::Mod if unsigned => ((left as u32) % (right as u32)) as i32,
            BinaryOperator::Mod => left.wrapping_rem(right),
            _ => 0,
        }
    }

    fn eval_real_arithmetic<T: Real>(&mut self, op: BinaryOperator, left: T, right: T, line: usize) -> T {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => guarded_div(left, right),
            BinaryOperator::Mod => {
                self.report(RuntimeError::TypeMisuse { details: "Invalid operator '%' for floating-point operands".into(),
                                                       line });
                T::ZERO
            },
            _ => T::ZERO,
        }
    }
}
