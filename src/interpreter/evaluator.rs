/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// comparisons and logical operators, in each numeric context.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and the increment and decrement operators, which write
/// their result back to the variable.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the control-flow signal and error reporting.
pub mod core;

/// Evaluation of `for` and `while` loops.
pub mod for_loop;

/// Statement execution and assignment.
pub mod statement;

/// `switch` statements with fallthrough.
pub mod switch;

/// Utility functions for evaluation.
///
/// Identifier resolution and its cache, kind inference, `sizeof` and the
/// static argument checks built-ins rely on.
pub mod utils;

/// Built-in calls.
///
/// Dispatches calls by name, checks arity and routes arguments to the host.
pub mod function;
