use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context<'_> {
    /// Executes a C-style `for` loop.
    ///
    /// `init` runs once. Before every iteration the condition is evaluated;
    /// a missing condition loops until a `break`. After every completed body
    /// the increment runs. A `break` in the body ends this loop only.
    ///
    /// # Parameters
    /// - `init`: Statement executed before the first iteration.
    /// - `condition`: Loop condition.
    /// - `increment`: Statement executed after each iteration.
    /// - `body`: Loop body.
    /// - `line`: Line number of the loop.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{BinaryOperator, Expr, Qualifiers, Statement, UnaryOperator},
    ///     interpreter::{
    ///         evaluator::core::{Context, Flow},
    ///         host::CaptureHost,
    ///         settings::Settings,
    ///     },
    /// };
    ///
    /// let mut host = CaptureHost::default();
    /// let mut ctx = Context::new(&mut host, Settings::default());
    ///
    /// // for (i = 0; i < 3; i++) print(i);
    /// let init = Statement::Assignment { name:       "i".into(),
    ///                                    value:      Expr::IntLiteral { value: 0, line: 1 },
    ///                                    declared:   None,
    ///                                    qualifiers: Qualifiers::NONE,
    ///                                    line:       1, };
    /// let condition = Expr::binary(BinaryOperator::Less,
    ///                              Expr::identifier("i", 1),
    ///                              Expr::IntLiteral { value: 3, line: 1 },
    ///                              1);
    /// let increment =
    ///     Statement::Expression { expr: Expr::UnaryOp { op:      UnaryOperator::PostIncrement,
    ///                                                   operand: Box::new(Expr::identifier("i", 1)),
    ///                                                   line:    1, },
    ///                             line: 1, };
    /// let body = Statement::Print { expr: Expr::identifier("i", 1),
    ///                               line: 1, };
    ///
    /// let flow = ctx.execute_for(Some(&init), Some(&condition), Some(&increment), &body, 1);
    /// assert_eq!(flow.unwrap(), Flow::Completed);
    /// drop(ctx);
    /// assert_eq!(host.stdout(), "0\n1\n2\n");
    /// ```
    pub fn execute_for(&mut self,
                       init: Option<&Statement>,
                       condition: Option<&Expr>,
                       increment: Option<&Statement>,
                       body: &Statement,
                       line: usize)
                       -> EvalResult<Flow> {
        if let Some(init) = init {
            self.execute(init)?;
        }

        loop {
            if let Some(condition) = condition
               && self.evaluate(condition)? == 0
            {
                break;
            }

            if let Flow::Break { .. } = self.execute(body)? {
                tracing::debug!(line, "break out of for loop");
                break;
            }

            if let Some(increment) = increment {
                self.execute(increment)?;
            }
        }

        Ok(Flow::Completed)
    }

    /// Executes a `while` loop.
    ///
    /// The condition is evaluated before every iteration. A `break` in the
    /// body ends this loop only.
    pub fn execute_while(&mut self, condition: &Expr, body: &Statement, line: usize) -> EvalResult<Flow> {
        while self.evaluate(condition)? != 0 {
            if let Flow::Break { .. } = self.execute(body)? {
                tracing::debug!(line, "break out of while loop");
                break;
            }
        }

        Ok(Flow::Completed)
    }
}
