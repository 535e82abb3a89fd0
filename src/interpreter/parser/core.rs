use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

/// Parses a whole program into a single statement sequence.
///
/// Grammar: `program := statement*`
///
/// An error for input that ends too early carries the line of the last token.
///
/// # Example
/// ```
/// use brainrot::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("int x = 1;\nx++;").unwrap();
/// let Statement::Sequence(statements) = parse_program(&tokens).unwrap() else {
///     panic!("expected a sequence");
/// };
/// assert_eq!(statements.len(), 2);
///
/// let tokens = tokenize("int x =\n").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(ParseError::UnexpectedEndOfInput { .. }) => {
                return Err(ParseError::UnexpectedEndOfInput { line: last_line });
            },
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(statements = statements.len(), "parsed program");
    Ok(Statement::Sequence(statements))
}
