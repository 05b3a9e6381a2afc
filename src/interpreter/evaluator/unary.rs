use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::{
        core::{Context, EvalResult, NotSemantics},
        utils::lenient_bool,
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a unary node.
    ///
    /// - `Print`: evaluates the operand, writes it as one line to the output
    ///   and yields `false` whatever was printed.
    /// - `Not`: depends on [`NotSemantics`]. With
    ///   [`NotSemantics::OperatorText`] the operator text `text` is read as a
    ///   boolean and negated, and the operand is left unevaluated. With
    ///   [`NotSemantics::NegateOperand`] the operand is evaluated and negated.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `text`: Source text of the operator token.
    /// - `operand`: The operand expression.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           text: &str,
                                                           operand: &Expr)
                                                           -> EvalResult<bool> {
        match op {
            UnaryOperator::Print => {
                let value = self.eval(operand)?;
                writeln!(self.output, "{value}")?;
                Ok(false)
            },
            UnaryOperator::Not => match self.not_semantics {
                NotSemantics::OperatorText => Ok(!lenient_bool(text)),
                NotSemantics::NegateOperand => Ok(!self.eval(operand)?),
            },
        }
    }
}
