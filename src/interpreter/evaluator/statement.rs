use crate::{
    ast::{Expr, Qualifiers, Statement, VarKind},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        format::FormatArg,
        value::{
            core::Value,
            number::{NumKind, Number},
        },
    },
    util::num::narrow_to_i32,
};

impl Context<'_> {
    /// Executes a single statement.
    ///
    /// Returns [`Flow::Break`] when a `break` was executed and has not yet been
    /// consumed by an enclosing loop or switch; sequences and `if` branches
    /// pass it outward unchanged.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{Expr, Qualifiers, Statement},
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
    /// let program = Statement::Sequence(vec![
    ///     Statement::Assignment { name:       "x".into(),
    ///                             value:      Expr::IntLiteral { value: 4, line: 1 },
    ///                             declared:   None,
    ///                             qualifiers: Qualifiers::NONE,
    ///                             line:       1, },
    ///     Statement::Break { line: 2 },
    ///     Statement::Print { expr: Expr::identifier("x", 3),
    ///                        line: 3, },
    /// ]);
    /// assert_eq!(ctx.execute(&program).unwrap(), Flow::Break { line: 2 });
    /// assert_eq!(ctx.symbols.len(), 1);
    /// drop(ctx);
    /// assert!(host.stdout().is_empty());
    /// ```
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { name,
                                    value,
                                    declared,
                                    qualifiers,
                                    line, } => {
                self.execute_assignment(name, value, *declared, *qualifiers, *line)?;
                Ok(Flow::Completed)
            },
            Statement::Expression { expr, .. } => {
                if let Expr::Call { name, arguments, line } = expr {
                    self.call_builtin(name, arguments, *line)?;
                } else {
                    self.evaluate(expr)?;
                }
                Ok(Flow::Completed)
            },
            Statement::For { init,
                             condition,
                             increment,
                             body,
                             line, } => {
                self.execute_for(init.as_deref(), condition.as_ref(), increment.as_deref(), body, *line)
            },
            Statement::While { condition, body, line } => self.execute_while(condition, body, *line),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition)? != 0 {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Completed)
                }
            },
            Statement::Switch { selector, cases, line } => self.execute_switch(selector, cases, *line),
            Statement::Break { line } => Ok(Flow::Break { line: *line }),
            Statement::Sequence(statements) => self.execute_sequence(statements),
            Statement::Print { expr, .. } => self.execute_print(expr, false),
            Statement::ErrorPrint { expr, .. } => self.execute_print(expr, true),
        }
    }

    /// Executes statements in order, stopping at the first pending `break`.
    fn execute_sequence(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let flow @ Flow::Break { .. } = self.execute(statement)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Completed)
    }

    /// `print(expr)` and `eprint(expr)`.
    ///
    /// A string literal is written as text followed by a newline; anything
    /// else is evaluated and written as an integer.
    fn execute_print(&mut self, expr: &Expr, to_error: bool) -> EvalResult<Flow> {
        let arg = match expr {
            Expr::StringLiteral { value, .. } => FormatArg::Str(value.clone()),
            other => FormatArg::Int(self.evaluate(other)?),
        };
        let format = if matches!(arg, FormatArg::Str(_)) { "%s\n" } else { "%d\n" };

        if to_error {
            self.host.baka(format, Some(arg));
        } else {
            self.host.yapping(format, Some(arg));
        }
        Ok(Flow::Completed)
    }

    /// Executes a declaration or assignment.
    ///
    /// Character and boolean literals are stored with their own kind. Any
    /// other right-hand side is evaluated in its inferred context. A
    /// declaration converts the result to its declared kind; a plain
    /// assignment records the inferred kind and keeps the variable's existing
    /// qualifiers.
    ///
    /// Storing a float or double above `i32::MAX` into an integer variable is
    /// reported and the value saturates.
    pub(crate) fn execute_assignment(&mut self,
                                     name: &str,
                                     value: &Expr,
                                     declared: Option<VarKind>,
                                     qualifiers: Qualifiers,
                                     line: usize)
                                     -> EvalResult<()> {
        let qualifiers = if declared.is_some() {
            qualifiers
        } else {
            self.symbols.qualifiers_of(name)
        };

        let (source_kind, number) = match value {
            Expr::CharLiteral { value, .. } => (VarKind::Char, Number::Int(i32::from(*value))),
            Expr::BoolLiteral { value, .. } => (VarKind::Bool, Number::from_bool(*value, NumKind::Int)),
            other => {
                let kind = self.infer_kind(other);
                (Self::kind_for(kind), self.eval_in(other, kind)?)
            },
        };
        let kind = declared.unwrap_or(source_kind);

        let stored = match (kind, number) {
            (VarKind::Int | VarKind::Char, Number::Float(_) | Number::Double(_)) => {
                let (narrowed, overflow) = narrow_to_i32(number.as_f64());
                if overflow {
                    self.report(RuntimeError::NarrowingOverflow { line });
                }
                Value::Int(narrowed)
            },
            _ => Value::from_number(number, kind),
        };

        tracing::trace!(name, %kind, value = %stored, "assign");
        self.store(name, kind, qualifiers, stored, line);
        Ok(())
    }

    /// Writes a variable, reporting a full symbol table instead of failing.
    pub(crate) fn store(&mut self,
                        name: &str,
                        kind: VarKind,
                        qualifiers: Qualifiers,
                        value: Value,
                        line: usize) {
        if let Err(full) = self.symbols.upsert(name, kind, qualifiers, value) {
            self.report(RuntimeError::CapacityExceeded { name: name.to_string(),
                                                         capacity: full.capacity,
                                                         line });
        }
    }

    /// The variable kind that records a value computed in `kind`.
    pub(crate) const fn kind_for(kind: NumKind) -> VarKind {
        match kind {
            NumKind::Int => VarKind::Int,
            NumKind::Float => VarKind::Float,
            NumKind::Double => VarKind::Double,
        }
    }
}
