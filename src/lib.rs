//! # boolex
//!
//! boolex is an interpreter for boolean logic expressions written in Rust.
//! It parses and evaluates expressions built from `true`, `false`, variables,
//! `and`, `or`, `xor`, `not`, `print` and assignment. Variables that have no
//! value yet are asked for on the input the first time they are used.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::core::Context,
    lexer::tokenize,
    parser::{
        core::{Rule, parse_expression, parse_program},
        statement::{parse_assignment, parse_unary_statement},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that represent
/// a parsed expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating code, with messages that name where the failure happened.
///
/// # Responsibilities
/// - Defines one error enum for syntax and one for evaluation.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser and the evaluator and
/// exposes their entry points.
pub mod interpreter;

/// Lexes, parses and evaluates `source` against `context`.
///
/// `rule` selects the top-level grammar rule. The context is borrowed, so a
/// caller can evaluate several sources against the same variables.
///
/// # Returns
/// - `Ok(Some(value))` with the value of the expression, or of the last
///   statement for [`Rule::Program`].
/// - `Ok(None)` for [`Rule::Assignment`] when the input is not an assignment,
///   and for an empty program.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Side effects that
/// happened before the failure, such as printed lines or assigned variables,
/// are kept.
///
/// # Examples
/// ```
/// use boolex::{
///     get_result,
///     interpreter::{evaluator::core::Context, parser::core::Rule},
/// };
///
/// let mut context = Context::with_io(std::io::empty(), Vec::new());
///
/// let result = get_result("x = false; print x; x or true", Rule::Program, &mut context);
/// assert_eq!(result.unwrap(), Some(true));
/// assert_eq!(context.output(), b"false\n");
///
/// // The closing parenthesis is missing.
/// assert!(get_result("(true or false", Rule::Expression, &mut context).is_err());
/// ```
pub fn get_result<R: BufRead, W: Write>(source: &str,
                                        rule: Rule,
                                        context: &mut Context<R, W>)
                                        -> Result<Option<bool>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let result = match rule {
        Rule::Expression => Some(context.eval(&parse_expression(&mut iter)?)?),
        Rule::Assignment => match parse_assignment(&mut iter)? {
            Some(assignment) => Some(context.eval(&assignment)?),
            None => {
                tracing::debug!("no assignment present");
                None
            },
        },
        Rule::Unary => Some(context.eval(&parse_unary_statement(&mut iter)?)?),
        Rule::Program => context.eval_program(&parse_program(&mut iter)?)?,
    };

    Ok(result)
}
