use crate::{
    ast::{Case, Expr},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context<'_> {
    /// Executes a `switch` statement with C fallthrough.
    ///
    /// The selector is evaluated once. Cases are visited in order; each case
    /// value is evaluated when its case is reached. The first equal value
    /// starts execution, and every later case body runs too until a `break`.
    /// A `default` branch runs whenever it is reached, matched or not, and
    /// the cases after it keep being visited.
    ///
    /// A `break` ends the switch and is consumed here.
    pub fn execute_switch(&mut self, selector: &Expr, cases: &[Case], line: usize) -> EvalResult<Flow> {
        let selected = self.evaluate(selector)?;
        let mut matched = false;

        for case in cases {
            let runs = match &case.value {
                Some(value) => {
                    if self.evaluate(value)? == selected {
                        matched = true;
                    }
                    matched
                },
                None => true,
            };

            if runs && let Flow::Break { .. } = self.execute(&case.body)? {
                tracing::debug!(line, selected, "break out of switch");
                break;
            }
        }

        Ok(Flow::Completed)
    }
}
