use crate::{
    ast::{BinaryOperator, Expr, Qualifiers},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::{NumKind, Number},
    },
};

impl Context<'_> {
    /// Evaluates a binary operation in the given context.
    ///
    /// Both operands are always evaluated, left first, in the same context as
    /// the operation itself. The result is routed by operator: arithmetic to
    /// `eval_arithmetic`, relational and equality operators to
    /// `eval_comparison`, AND and OR to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `qualifiers`: Qualifiers of the enclosing declaration; `unsigned`
    ///   switches integer modulo to unsigned arithmetic.
    /// - `line`: Line number for error reporting.
    /// - `kind`: The numeric context.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{BinaryOperator, Expr, Qualifiers},
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
    /// let seven = Expr::IntLiteral { value: 7, line: 1 };
    /// let two = Expr::IntLiteral { value: 2, line: 1 };
    /// let result = ctx.eval_binary_op(BinaryOperator::Div,
    ///                                 &seven,
    ///                                 &two,
    ///                                 Qualifiers::NONE,
    ///                                 1,
    ///                                 NumKind::Double);
    /// assert_eq!(result.unwrap(), Number::Double(3.5));
    /// ```
    pub fn eval_binary_op(&mut self,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr,
                          qualifiers: Qualifiers,
                          line: usize,
                          kind: NumKind)
                          -> EvalResult<Number> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        let left = self.eval_in(left, kind)?;
        let right = self.eval_in(right, kind)?;

        match op {
            Add | Sub | Mul | Div | Mod => Ok(self.eval_arithmetic(op, left, right, qualifiers, line)),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Ok(Self::eval_comparison(op, left, right))
            },
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
