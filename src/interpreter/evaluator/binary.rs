use std::io::{BufRead, Write};

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a binary node.
    ///
    /// Logical operators evaluate both operands, left first, with no
    /// short-circuiting. Assignment is handled by [`Self::eval_assign`].
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            op: BinaryOperator,
                                                            left: &Expr,
                                                            right: &Expr,
                                                            position: usize)
                                                            -> EvalResult<bool> {
        match op {
            BinaryOperator::Assign => self.eval_assign(left, right, position),
            BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_logic(op, left, right))
            },
        }
    }

    /// Combines two boolean values with a logical operator.
    ///
    /// For [`BinaryOperator::Assign`] the right value is returned, which is
    /// the value an assignment produces.
    ///
    /// # Example
    /// ```
    /// use std::io::{Empty, Sink};
    ///
    /// use boolex::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert!(Context::<Empty, Sink>::eval_logic(BinaryOperator::Xor, true, false));
    /// assert!(!Context::<Empty, Sink>::eval_logic(BinaryOperator::Xor, true, true));
    /// assert!(!Context::<Empty, Sink>::eval_logic(BinaryOperator::And, true, false));
    /// ```
    pub const fn eval_logic(op: BinaryOperator, left: bool, right: bool) -> bool {
        match op {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            BinaryOperator::Xor => left ^ right,
            BinaryOperator::Assign => right,
        }
    }

    /// Evaluates `value` and stores it under the variable named by `target`.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownExpression`] if `target` is not a variable,
    /// which the parser never produces. Propagates errors from `value`.
    fn eval_assign(&mut self, target: &Expr, value: &Expr, position: usize) -> EvalResult<bool> {
        let Expr::Variable { name, .. } = target else {
            return Err(EvalError::UnknownExpression { position });
        };

        let value = self.eval(value)?;
        tracing::debug!(name, value, "assigned variable");
        self.variables.insert(name.clone(), value);

        Ok(value)
    }
}
