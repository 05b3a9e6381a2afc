/// Core evaluation logic and context management.
///
/// Contains the evaluation context, which owns the variable environment and
/// the input and output handles, and the dispatch over expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Logical `and`, `or`, `xor` and assignment.
pub mod binary;

/// Unary operator evaluation.
///
/// `not` and the side-effecting `print`.
pub mod unary;

/// Variable lookup.
///
/// Resolves names from the environment and asks for unknown values on the
/// input.
pub mod variable;

/// Utility functions for evaluation.
///
/// Boolean text conversions shared by literals, prompts and `not`.
pub mod utils;
