use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_factor},
    },
};

/// Operators accepted at the disjunction level.
const DISJUNCTION: &[(TokenKind, BinaryOperator)] =
    &[(TokenKind::Or, BinaryOperator::Or), (TokenKind::Xor, BinaryOperator::Xor)];

/// Operators accepted at the conjunction level.
const CONJUNCTION: &[(TokenKind, BinaryOperator)] = &[(TokenKind::And, BinaryOperator::And)];

/// Parses `or` and `xor` chains.
///
/// Both operators share the lowest precedence level and associate to the
/// left, so `a or b xor c` parses as `(a or b) xor c`.
///
/// The rule is: `disjunction := conjunction (("or" | "xor") conjunction)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A left-leaning `Expr::BinaryOp` tree, or the single conjunction when no
/// operator follows it.
pub fn parse_disjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, DISJUNCTION, parse_conjunction)
}

/// Parses `and` chains.
///
/// `and` binds tighter than `or` and `xor`.
///
/// The rule is: `conjunction := factor ("and" factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A left-leaning `Expr::BinaryOp` tree of factors.
pub fn parse_conjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, CONJUNCTION, parse_factor)
}

/// Parses `operand (op operand)*` where `op` is any operator in `operators`.
///
/// Each new operator wraps the tree built so far as its left child.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[(TokenKind, BinaryOperator)],
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_operand(tokens)?;

    loop {
        let Some(token) = tokens.peek() else {
            break;
        };
        let Some(&(_, op)) = operators.iter().find(|(kind, _)| *kind == token.kind) else {
            break;
        };
        let position = token.position;
        tokens.next();

        let right = parse_operand(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                position };
    }

    Ok(left)
}
