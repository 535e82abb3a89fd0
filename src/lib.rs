//! # brainrot
//!
//! brainrot is an interpreter for a small C-like scripting language.
//! It tokenizes and parses a program, then executes it against a global
//! symbol table with three numeric evaluation contexts, `switch` fallthrough
//! and a handful of output and process built-ins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context,
        host::Host,
        lexer::tokenize,
        parser::core::parse_program,
        settings::Settings,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to every node for error reporting.
/// - Gives identifier nodes a stable identity for the resolution cache.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// executing a program, with the source line they refer to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the host boundary and runtime settings.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// Tolerant floating-point comparisons, guarded division and C-style
/// conversions to `int`, shared by the evaluator.
pub mod util;

/// Tokenizes and parses a program.
///
/// # Errors
/// Returns a `ParseError` for input that does not tokenize or does not follow
/// the grammar.
///
/// # Example
/// ```
/// use brainrot::parse_source;
///
/// assert!(parse_source("int x = 1;").is_ok());
/// assert!(parse_source("int x = ;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Statement, ParseError> {
    let tokens = tokenize(source).map_err(|(token, line)| ParseError::UnexpectedToken { token,
                                                                                        line })?;
    parse_program(&tokens)
}

/// Runs a program from source.
///
/// This function parses the whole source first and then executes it with a
/// fresh evaluation context. Every output and the exit request of `ragequit`
/// go to `host`.
///
/// # Errors
/// Returns an error if parsing fails or if a runtime error stops the program.
/// A program that called `ragequit` returns `RuntimeError::Terminated`.
///
/// # Examples
/// ```
/// use brainrot::{
///     interpreter::{host::CaptureHost, settings::Settings},
///     run_source,
/// };
///
/// let mut host = CaptureHost::default();
/// let source = "int x = 2 + 2;\nyapping(\"%d\\n\", x);";
/// assert!(run_source(source, &mut host, Settings::default()).is_ok());
/// assert_eq!(host.stdout(), "4\n");
///
/// // Reading an undefined variable in an integer expression is fatal.
/// let mut host = CaptureHost::default();
/// assert!(run_source("int y = x + 1;", &mut host, Settings::default()).is_err());
/// ```
pub fn run_source(source: &str, host: &mut dyn Host, settings: Settings) -> Result<(), Error> {
    let program = parse_source(source)?;
    let mut context = Context::new(host, settings);
    context.run(&program)?;
    tracing::debug!(variables = context.symbols.len(), "program finished");
    for variable in context.symbols.iter() {
        tracing::trace!(name = %variable.name, kind = %variable.kind, value = %variable.value, "final value");
    }
    Ok(())
}
