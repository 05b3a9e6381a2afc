use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_disjunction, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// The top-level grammar rule a caller parses its input with.
///
/// The statement forms overlap with the general expression at the top level,
/// so the caller picks which rule applies instead of the parser guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// A general boolean expression, see [`parse_expression`].
    #[default]
    Expression,
    /// An assignment statement, see
    /// [`parse_assignment`](crate::interpreter::parser::statement::parse_assignment).
    Assignment,
    /// A unary-operator statement, see
    /// [`parse_unary_statement`](crate::interpreter::parser::statement::parse_unary_statement).
    Unary,
    /// A sequence of statements, see [`parse_program`].
    Program,
}

/// Parses a general boolean expression.
///
/// This is the primary entry point. It begins at the lowest precedence level,
/// disjunction, and descends through conjunction to factors. No statement
/// terminator is consumed: a trailing `;` stays in the stream.
///
/// Grammar: `expression := conjunction (("or" | "xor") conjunction)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed expression tree.
///
/// # Example
/// ```
/// use boolex::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("true or true and false;").unwrap();
/// let tree = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(tree.to_string(), "(or true (and true false))");
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_disjunction(tokens)
}

/// Parses a sequence of statements until the input is exhausted.
///
/// Every statement but the last must end with `;`. Each statement is parsed
/// with [`parse_statement`], so assignments, unary statements and plain
/// expressions may be mixed freely.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement.
///
/// # Returns
/// The statements in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    tracing::debug!(count = statements.len(), "parsed program");
    Ok(statements)
}
