/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the AST, combines boolean values, keeps the
/// variable environment up to date, asks for unknown variables on the input
/// and writes printed values to the output.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Owns the variable environment for the lifetime of a run.
/// - Reports evaluation errors such as malformed literals or closed input.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, its source text and its byte offset. Whitespace and
/// comments are dropped before the parser sees the stream.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and position.
/// - Recognizes keywords regardless of ASCII case.
/// - Reports characters that are not part of the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with a
/// recursive-descent grammar of three precedence levels and two statement
/// forms.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Lets the caller choose the top-level rule.
/// - Reports syntax errors with the expected token kinds and location.
pub mod parser;
