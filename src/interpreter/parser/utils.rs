use std::iter::Peekable;

use crate::{
    error::{Location, SyntaxError},
    interpreter::{lexer::{Token, TokenKind}, parser::core::ParseResult},
};

/// Returns where the parser currently stands.
///
/// This is the position of the next token, or [`Location::EndOfInput`] once
/// the stream is exhausted.
pub(in crate::interpreter::parser) fn current_location<'a, I>(tokens: &mut Peekable<I>) -> Location
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .map_or(Location::EndOfInput, |token| Location::Position(token.position))
}

/// Consumes the next token if its kind is one of `expected`.
///
/// The stream is left untouched when the next token does not match or when
/// there is no next token.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `expected`: Kinds that may be consumed.
///
/// # Returns
/// The consumed token, or `None`.
pub(in crate::interpreter::parser) fn match_token<'a, I>(tokens: &mut Peekable<I>,
                                                         expected: &[TokenKind])
                                                         -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| expected.contains(&token.kind))
}

/// Consumes the next token, which must be one of `expected`.
///
/// # Errors
/// Returns [`SyntaxError::Expected`] listing `expected` and the current
/// location if the next token does not match or the input is exhausted.
pub(in crate::interpreter::parser) fn require<'a, I>(tokens: &mut Peekable<I>,
                                                     expected: &[TokenKind])
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match match_token(tokens, expected) {
        Some(token) => Ok(token),
        None => Err(SyntaxError::Expected { expected: expected.to_vec(),
                                            location: current_location(tokens), }),
    }
}
