use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{current_location, match_token, require},
        },
    },
};

/// Parses a factor: a parenthesized expression or a single element.
///
/// A parenthesized subexpression restarts at the top of the precedence chain
/// and must be closed by `)`.
///
/// Grammar: `factor := "(" expression ")" | element`
///
/// # Errors
/// - [`SyntaxError::Expected`] naming `RPAR` if the closing parenthesis is
///   missing.
/// - Propagates errors from the nested expression or element.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if match_token(tokens, &[TokenKind::LPar]).is_some() {
        let expr = parse_expression(tokens)?;
        require(tokens, &[TokenKind::RPar])?;
        return Ok(expr);
    }

    parse_element(tokens)
}

/// Parses an element: a boolean literal or a variable reference.
///
/// Grammar: `element := "true" | "false" | identifier`
///
/// # Errors
/// Returns [`SyntaxError::ExpectedOperand`] if the next token is anything else
/// or the input is exhausted.
pub fn parse_element<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = match_token(tokens, &[TokenKind::True, TokenKind::False]) {
        return Ok(Expr::BooleanLiteral { text:     token.text.clone(),
                                         position: token.position, });
    }

    if let Some(token) = match_token(tokens, &[TokenKind::Id]) {
        return Ok(Expr::Variable { name:     token.text.clone(),
                                   position: token.position, });
    }

    Err(SyntaxError::ExpectedOperand { location: current_location(tokens) })
}
