/// Entry points of the grammar.
///
/// Holds the result type shared by all rules, the general expression entry and
/// the program rule that strings statements together.
pub mod core;

/// Left-associative binary chains.
///
/// Implements conjunction (`and`) and disjunction (`or`, `xor`) on top of the
/// factor rule.
pub mod binary;

/// Factors and elements.
///
/// Parenthesized subexpressions, boolean literals and variable references.
pub mod primary;

/// Statement forms.
///
/// Assignment statements, unary-operator statements and the dispatcher that
/// picks between them and a plain expression.
pub mod statement;

/// Token matching helpers.
///
/// Small routines for consuming expected tokens and locating errors.
pub mod utils;
