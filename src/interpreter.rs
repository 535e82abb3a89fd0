/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator chooses a numeric context for every expression, computes it,
/// executes statements in order and dispatches built-in calls to the host. It
/// is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions in the integer, float or double context.
/// - Executes assignments and control flow, including `switch` fallthrough.
/// - Reports recoverable runtime errors and stops on fatal ones.
pub mod evaluator;
/// printf-style rendering of a format string and one argument.
///
/// Used by the hosts to turn the output primitives' arguments into text.
pub mod format;
/// The boundary between a running program and the outside world.
///
/// Every observable effect of a program (output, termination, sleeping and
/// diagnostics) goes through the `Host` trait.
pub mod host;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric, character and string literals, identifiers, keywords and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with line info.
/// - Desugars compound assignments and stamps declaration qualifiers.
pub mod parser;
/// Runtime configuration.
pub mod settings;
/// The global symbol table.
pub mod symbols;
/// The value module defines the runtime data types for evaluation.
///
/// `Value` is what a variable stores; `Number` is what an expression computes
/// in one of the three numeric contexts.
pub mod value;
