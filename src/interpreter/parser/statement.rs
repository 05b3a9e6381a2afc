use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            primary::parse_element,
            utils::{current_location, match_token, require},
        },
    },
};

/// Parses a single statement of a program.
///
/// A statement may be one of:
/// - an assignment (`x = true;`),
/// - a unary-operator statement (`x not;`, `not x;`, `print x;`),
/// - an expression, terminated by `;` unless it is the last statement.
///
/// The forms are tried in that order. The choice between a unary statement
/// and an expression is made by looking ahead without consuming anything.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the statement.
///
/// # Returns
/// The statement's expression tree.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(assignment) = parse_assignment(tokens)? {
        return Ok(assignment);
    }
    if starts_unary_statement(tokens) {
        return parse_unary_statement(tokens);
    }

    let expr = parse_expression(tokens)?;
    if tokens.peek().is_some() {
        require(tokens, &[TokenKind::Semicolon])?;
    }

    Ok(expr)
}

/// Parses an assignment statement, if one is present.
///
/// The statement is only recognized when an identifier is directly followed
/// by `=`. Otherwise nothing is consumed and `Ok(None)` is returned, so the
/// caller can fall back to another rule. Once `=` has been seen the parser is
/// committed and any further mismatch is an error.
///
/// Grammar: `assignment := identifier "=" element ";"`
///
/// # Errors
/// - [`SyntaxError::ExpectedOperand`] if no element follows `=`.
/// - [`SyntaxError::Expected`] naming `SEMICOLON` if the terminator is
///   missing.
///
/// # Example
/// ```
/// use boolex::interpreter::{lexer::tokenize, parser::statement::parse_assignment};
///
/// let tokens = tokenize("x or y").unwrap();
/// let mut iter = tokens.iter().peekable();
///
/// assert_eq!(parse_assignment(&mut iter).unwrap(), None);
/// assert_eq!(iter.count(), 3);
/// ```
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let is_assignment = match_token(&mut lookahead, &[TokenKind::Id]).is_some()
                        && match_token(&mut lookahead, &[TokenKind::Assign]).is_some();
    if !is_assignment {
        return Ok(None);
    }

    let target = parse_element(tokens)?;
    let operator = require(tokens, &[TokenKind::Assign])?;
    let value = parse_element(tokens)?;
    require(tokens, &[TokenKind::Semicolon])?;

    tracing::debug!(variable = %target, "parsed assignment");
    Ok(Some(Expr::BinaryOp { op:       BinaryOperator::Assign,
                             left:     Box::new(target),
                             right:    Box::new(value),
                             position: operator.position, }))
}

/// Parses a unary-operator statement.
///
/// `not` is recognized after a literal or variable, while `print` is only
/// recognized before its operand. A leading `not` is also accepted as a
/// prefix operator.
///
/// Grammar:
/// ```text
///     unary_statement := ("true" | "false" | identifier) "not" ";"
///                      | "not" element ";"
///                      | "print" element ";"
/// ```
///
/// # Errors
/// - [`SyntaxError::Expected`] if the statement starts with any other token,
///   if a postfix `not` is missing, or if the terminating `;` is missing.
/// - [`SyntaxError::ExpectedOperand`] if a prefix operator has no element.
pub fn parse_unary_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::True | TokenKind::False | TokenKind::Id) => {
            let operand = parse_element(tokens)?;
            let operator = require(tokens, &[TokenKind::Not])?;
            unary_node(UnaryOperator::Not, operator, operand)
        },
        Some(TokenKind::Print | TokenKind::Not) => {
            let operator = require(tokens, &[TokenKind::Print, TokenKind::Not])?;
            let op = if operator.kind == TokenKind::Print {
                UnaryOperator::Print
            } else {
                UnaryOperator::Not
            };
            let operand = parse_element(tokens)?;
            unary_node(op, operator, operand)
        },
        _ => {
            return Err(SyntaxError::Expected { expected: vec![TokenKind::True,
                                                             TokenKind::False,
                                                             TokenKind::Id,
                                                             TokenKind::Print,
                                                             TokenKind::Not],
                                               location: current_location(tokens), });
        },
    };
    require(tokens, &[TokenKind::Semicolon])?;

    Ok(expr)
}

/// Tells whether the upcoming tokens form a unary-operator statement.
///
/// True for a leading `print` or `not`, and for a literal or variable that is
/// immediately followed by `not`. Nothing is consumed.
fn starts_unary_statement<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    match lookahead.next().map(|token| token.kind) {
        Some(TokenKind::Print | TokenKind::Not) => true,
        Some(TokenKind::True | TokenKind::False | TokenKind::Id) => {
            lookahead.next()
                     .is_some_and(|token| token.kind == TokenKind::Not)
        },
        _ => false,
    }
}

fn unary_node(op: UnaryOperator, operator: &Token, operand: Expr) -> Expr {
    Expr::UnaryOp { op,
                    text: operator.text.clone(),
                    operand: Box::new(operand),
                    position: operator.position }
}
