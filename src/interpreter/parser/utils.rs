use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
/// - `description`: How the token is named in the error message.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// `Expected` if another token is next, `UnexpectedEndOfInput` if none is.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &'static str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::Expected { expected: description,
                                                        found:    describe(tok),
                                                        line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is used by call argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::Expected { expected: "',' or closing parenthesis",
                                                  found:    describe(tok),
                                                  line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier name and its line.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => Err(ParseError::Expected { expected: "identifier",
                                                        found:    describe(tok),
                                                        line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Renders a token the way it appears in source, for error messages.
pub(in crate::interpreter::parser) fn describe(token: &Token) -> String {
    let text = match token {
        Token::Float(v) => return format!("'{v}f'"),
        Token::Double(v) => return format!("'{v}'"),
        Token::Integer(v) => return format!("'{v}'"),
        Token::Char(c) => return format!("'{}'", char::from(*c).escape_default()),
        Token::Str(s) => return format!("\"{}\"", s.escape_default()),
        Token::Bool(b) => return format!("'{b}'"),
        Token::Identifier(name) => return format!("'{name}'"),
        Token::IntKw => "int",
        Token::FloatKw => "float",
        Token::DoubleKw => "double",
        Token::BoolKw => "bool",
        Token::CharKw => "char",
        Token::Volatile => "volatile",
        Token::Signed => "signed",
        Token::Unsigned => "unsigned",
        Token::If => "if",
        Token::Else => "else",
        Token::While => "while",
        Token::For => "for",
        Token::Switch => "switch",
        Token::Case => "case",
        Token::Default => "default",
        Token::Break => "break",
        Token::Sizeof => "sizeof",
        Token::Print => "print",
        Token::EPrint => "eprint",
        Token::Comment | Token::MultiLineComment => "comment",
        Token::NewLine => "newline",
        Token::PlusPlus => "++",
        Token::MinusMinus => "--",
        Token::PlusAssign => "+=",
        Token::MinusAssign => "-=",
        Token::MulAssign => "*=",
        Token::DivAssign => "/=",
        Token::ModAssign => "%=",
        Token::Plus => "+",
        Token::Minus => "-",
        Token::Star => "*",
        Token::Slash => "/",
        Token::Percent => "%",
        Token::EqualEqual => "==",
        Token::BangEqual => "!=",
        Token::LessEqual => "<=",
        Token::GreaterEqual => ">=",
        Token::Less => "<",
        Token::Greater => ">",
        Token::AndAnd => "&&",
        Token::OrOr => "||",
        Token::Equals => "=",
        Token::LParen => "(",
        Token::RParen => ")",
        Token::LBrace => "{",
        Token::RBrace => "}",
        Token::Semicolon => ";",
        Token::Colon => ":",
        Token::Comma => ",",
    };
    format!("'{text}'")
}
