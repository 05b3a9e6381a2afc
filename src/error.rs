/// Syntax errors.
///
/// Defines the errors raised while lexing and parsing source text. A syntax
/// error names the token kinds that would have been accepted and where the
/// parser was when it gave up.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the errors raised while walking an expression tree: literals that
/// are not booleans, malformed hand-built trees, and failures reading a
/// variable's value from the input.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::{Location, SyntaxError};
