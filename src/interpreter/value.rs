/// Stored variable values.
///
/// Defines the `Value` enum held by the symbol table, tagged by the variable's
/// declared kind, and the coercions from evaluation results into it.
pub mod core;
/// Evaluation-time numbers.
///
/// Defines `NumKind`, the three evaluation contexts, and `Number`, the tagged
/// value the evaluator computes with.
pub mod number;
