/// Entry points: whole programs and full expressions.
pub mod core;

/// Unary and primary expressions.
///
/// Handles negation, increment and decrement, literals, variables, calls,
/// `sizeof` and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication.
pub mod binary;

/// Brace-delimited blocks.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, identifiers and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Declarations, assignments, control flow, `print` and expression
/// statements.
pub mod statement;
