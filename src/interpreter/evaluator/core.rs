use std::{
    collections::HashMap,
    io::{self, BufRead, StdinLock, Stdout, Write},
};

use crate::{ast::Expr, error::EvalError, interpreter::evaluator::utils::parse_literal};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// How a `not` node is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotSemantics {
    /// Negate the operator's own text read as a boolean. The operand is not
    /// evaluated, and since `not` never reads as `true` the result is always
    /// `true`.
    #[default]
    OperatorText,
    /// Evaluate the operand and negate it.
    NegateOperand,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment, the
/// configured `not` semantics, and the handles used to prompt for unknown
/// variables and to print values.
///
/// ## Usage
///
/// `Context` is created once and reused for every expression of a run, so
/// variables assigned or entered by the user stay known.
pub struct Context<R, W> {
    /// Values of all variables assigned or entered so far.
    pub variables:     HashMap<String, bool>,
    /// How `not` nodes are evaluated.
    pub not_semantics: NotSemantics,
    pub(in crate::interpreter::evaluator) input:  R,
    pub(in crate::interpreter::evaluator) output: W,
}

#[allow(clippy::new_without_default)]
impl Context<StdinLock<'static>, Stdout> {
    /// Creates a context that prompts on standard output and reads answers
    /// from standard input. The environment starts empty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Creates a context with an empty environment that reads variable values
    /// from `input` and writes prompts and printed values to `output`.
    pub fn with_io(input: R, output: W) -> Self {
        Self { variables: HashMap::new(),
               not_semantics: NotSemantics::default(),
               input,
               output }
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Evaluates an expression tree to a boolean.
    ///
    /// This is the main entry point for evaluation. Children are evaluated
    /// left before right, depth first, so prompts and printed lines appear in
    /// source order.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The boolean value of the expression.
    ///
    /// # Example
    /// ```
    /// use boolex::{
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_expression},
    /// };
    ///
    /// let tokens = tokenize("(true xor true) or true;").unwrap();
    /// let tree = parse_expression(&mut tokens.iter().peekable()).unwrap();
    ///
    /// let mut context = Context::with_io(std::io::empty(), Vec::new());
    /// assert!(context.eval(&tree).unwrap());
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<bool> {
        match expr {
            Expr::BooleanLiteral { text, position } => parse_literal(text, *position),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::BinaryOp { op,
                             left,
                             right,
                             position, } => self.eval_binary_op(*op, left, right, *position),
            Expr::UnaryOp { op, text, operand, .. } => self.eval_unary_op(*op, text, operand),
        }
    }

    /// Evaluates statements in order against this context.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty program.
    pub fn eval_program(&mut self, statements: &[Expr]) -> EvalResult<Option<bool>> {
        let mut result = None;

        for statement in statements {
            tracing::trace!(%statement, "evaluating statement");
            result = Some(self.eval(statement)?);
        }

        Ok(result)
    }
}
