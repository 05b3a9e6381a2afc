use std::fmt;

use logos::Logos;

use crate::error::SyntaxError;

/// The kind of a lexical token.
///
/// Keywords are matched regardless of ASCII case, so `TRUE`, `True` and `true`
/// all produce [`TokenKind::True`]. Longer words such as `trueish` are
/// identifiers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `true`
    #[token("true", ignore(ascii_case))]
    True,
    /// `false`
    #[token("false", ignore(ascii_case))]
    False,
    /// Variable names such as `x` or `door_open`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,
    /// `=`
    #[token("=")]
    Assign,
    /// `not`
    #[token("not", ignore(ascii_case))]
    Not,
    /// `and`
    #[token("and", ignore(ascii_case))]
    And,
    /// `or`
    #[token("or", ignore(ascii_case))]
    Or,
    /// `xor`
    #[token("xor", ignore(ascii_case))]
    Xor,
    /// `print`
    #[token("print", ignore(ascii_case))]
    Print,
    /// `(`
    #[token("(")]
    LPar,
    /// `)`
    #[token(")")]
    RPar,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs and line breaks. Removed by [`tokenize`].
    #[regex(r"[ \t\r\n\f]+")]
    Space,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Id => "ID",
            Self::Assign => "ASSIGN",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Print => "PRINT",
            Self::LPar => "LPAR",
            Self::RPar => "RPAR",
            Self::Semicolon => "SEMICOLON",
            Self::Space => "SPACE",
            Self::Comment => "COMMENT",
        };
        write!(f, "{name}")
    }
}

/// A token handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The exact source slice, e.g. `True` for a [`TokenKind::True`].
    pub text:     String,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

/// Splits source text into tokens, dropping whitespace and comments.
///
/// # Errors
/// Returns [`SyntaxError::UnknownCharacter`] for input the lexer does not
/// recognize, such as `&` or `!`.
///
/// # Example
/// ```
/// use boolex::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = TRUE;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Id, TokenKind::Assign, TokenKind::True, TokenKind::Semicolon]);
/// assert_eq!(tokens[2].text, "TRUE");
/// assert_eq!(tokens[2].position, 4);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        match kind {
            Ok(TokenKind::Space) => {},
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            position }),
            Err(()) => {
                return Err(SyntaxError::UnknownCharacter { text: lexer.slice().to_string(),
                                                           position });
            },
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
