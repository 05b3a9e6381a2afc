use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// Where in the token stream a syntax error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Byte offset of the offending token.
    Position(usize),
    /// The token stream ran out.
    EndOfInput,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "в позиции {position}"),
            Self::EndOfInput => write!(f, "в конце файла"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// A token of one of the `expected` kinds was required.
    Expected {
        /// Kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// Where the parser stopped.
        location: Location,
    },
    /// A boolean literal or a variable was required.
    ExpectedOperand {
        /// Where the parser stopped.
        location: Location,
    },
    /// The lexer found text that is not part of the language.
    UnknownCharacter {
        /// The unrecognized slice.
        text:     String,
        /// Byte offset of the slice.
        position: usize,
    },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected { expected, location } => {
                let kinds = expected.iter()
                                    .map(ToString::to_string)
                                    .collect::<Vec<_>>()
                                    .join(", ");
                write!(f, "Ожидается [{kinds}] {location}")
            },
            Self::ExpectedOperand { location } => {
                write!(f, "Ожидается число или переменная {location}")
            },
            Self::UnknownCharacter { text, position } => {
                write!(f, "Неизвестный символ '{text}' в позиции {position}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
