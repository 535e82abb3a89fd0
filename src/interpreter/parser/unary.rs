use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{describe, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses prefix unary expressions.
///
/// The rule is: `unary := ("-" | "++" | "--") unary | postfix`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::UnaryOp`, or the postfix expression itself.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::PlusPlus, _)) => UnaryOperator::PreIncrement,
        Some((Token::MinusMinus, _)) => UnaryOperator::PreDecrement,
        _ => return parse_postfix(tokens),
    };
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let operand = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       line: *line })
}

/// Parses postfix increment and decrement.
///
/// The rule is: `postfix := primary ("++" | "--")*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens)?;
    while let Some(&(token, line)) = tokens.peek() {
        let op = match token {
            Token::PlusPlus => UnaryOperator::PostIncrement,
            Token::MinusMinus => UnaryOperator::PostDecrement,
            _ => break,
        };
        tokens.next();
        expr = Expr::UnaryOp { op,
                               operand: Box::new(expr),
                               line: *line };
    }
    Ok(expr)
}

/// Parses a primary expression.
///
/// The rule is:
/// ```text
/// primary := literal
///          | identifier
///          | identifier "(" arguments ")"
///          | "sizeof" "(" identifier ")"
///          | "(" expression ")"
/// ```
///
/// # Errors
/// `LiteralTooLarge` for an integer literal outside the `int` range, and
/// `UnexpectedToken` for anything that cannot start an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    match token {
        Token::Integer(v) => {
            let value = i32::try_from(*v).map_err(|_| ParseError::LiteralTooLarge { line })?;
            Ok(Expr::IntLiteral { value, line })
        },
        Token::Float(value) => Ok(Expr::FloatLiteral { value: *value,
                                                       line }),
        Token::Double(value) => Ok(Expr::DoubleLiteral { value: *value,
                                                         line }),
        Token::Char(value) => Ok(Expr::CharLiteral { value: *value,
                                                     line }),
        Token::Bool(value) => Ok(Expr::BoolLiteral { value: *value,
                                                     line }),
        Token::Str(value) => Ok(Expr::StringLiteral { value: value.clone(),
                                                      line }),
        Token::Identifier(name) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::Call { name: name.clone(),
                                       arguments,
                                       line });
            }
            Ok(Expr::identifier(name.clone(), line))
        },
        Token::Sizeof => {
            expect(tokens, &Token::LParen, "'(' after sizeof")?;
            let (name, _) = parse_identifier(tokens)?;
            expect(tokens, &Token::RParen, "')' after sizeof operand")?;
            Ok(Expr::Sizeof { name, line })
        },
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        other => Err(ParseError::UnexpectedToken { token: describe(other),
                                                   line }),
    }
}
