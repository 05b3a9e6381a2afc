use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Reads a literal's text as a boolean, ignoring ASCII case.
///
/// # Errors
/// Returns [`EvalError::InvalidBoolean`] for text other than `true` or
/// `false`.
///
/// # Example
/// ```
/// use boolex::interpreter::evaluator::utils::parse_literal;
///
/// assert_eq!(parse_literal("TRUE", 0), Ok(true));
/// assert_eq!(parse_literal("false", 0), Ok(false));
/// assert!(parse_literal("yes", 0).is_err());
/// ```
pub fn parse_literal(text: &str, position: usize) -> EvalResult<bool> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(EvalError::InvalidBoolean { text: text.to_string(),
                                        position })
    }
}

/// Reads arbitrary text as a boolean: `true` in any ASCII case is true,
/// anything else is false.
pub fn lenient_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}
