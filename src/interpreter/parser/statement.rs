use std::iter::Peekable;

use crate::{
    ast::{Case, Expr, Qualifiers, Statement, VarKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::compound_assignment_operator,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{describe, expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement can be:
/// - a block `{ ... }`,
/// - an `if`, `while`, `for` or `switch` statement,
/// - `break;`,
/// - `print(expr);` or `eprint(expr);`,
/// - an empty statement `;`,
/// - a declaration, an assignment or an expression statement, followed by
///   `;`.
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed statement.
///
/// # Example
/// ```
/// use brainrot::{
///     ast::{Statement, VarKind},
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("unsigned int count = 3;").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// let Statement::Assignment { name, declared, qualifiers, .. } = statement else {
///     panic!("expected a declaration");
/// };
/// assert_eq!(name, "count");
/// assert_eq!(declared, Some(VarKind::Int));
/// assert!(qualifiers.is_unsigned);
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(&entry) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let (token, line) = entry;
    let line = *line;

    match token {
        Token::LBrace => {
            tokens.next();
            parse_block(tokens)
        },
        Token::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        Token::While => {
            tokens.next();
            parse_while(tokens, line)
        },
        Token::For => {
            tokens.next();
            parse_for(tokens, line)
        },
        Token::Switch => {
            tokens.next();
            parse_switch(tokens, line)
        },
        Token::Break => {
            tokens.next();
            expect(tokens, &Token::Semicolon, "';' after break")?;
            Ok(Statement::Break { line })
        },
        Token::Print | Token::EPrint => {
            tokens.next();
            expect(tokens, &Token::LParen, "'('")?;
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            expect(tokens, &Token::Semicolon, "';'")?;
            if *token == Token::EPrint {
                Ok(Statement::ErrorPrint { expr, line })
            } else {
                Ok(Statement::Print { expr, line })
            }
        },
        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Sequence(Vec::new()))
        },
        _ => {
            let statement = parse_simple_statement(tokens)?;
            expect(tokens, &Token::Semicolon, "';'")?;
            Ok(statement)
        },
    }
}

/// Parses a statement that may appear in a `for` header: a declaration, an
/// assignment or an expression. The terminating `;` is not consumed.
///
/// Compound assignments are rewritten: `x += e` becomes `x = x + e`.
///
/// # Errors
/// `InvalidAssignmentTarget` if `=` follows anything but a variable name.
pub fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, _)) = tokens.peek()
       && starts_declaration(token)
    {
        return parse_declaration(tokens);
    }

    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(name), line)) = lookahead.next()
       && let Some((next, _)) = lookahead.next()
    {
        let op = compound_assignment_operator(next);
        if *next == Token::Equals || op.is_some() {
            tokens.next();
            tokens.next();
            let rhs = parse_expression(tokens)?;
            let value = match op {
                Some(op) => Expr::binary(op, Expr::identifier(name.clone(), *line), rhs, *line),
                None => rhs,
            };
            return Ok(Statement::Assignment { name: name.clone(),
                                              value,
                                              declared: None,
                                              qualifiers: Qualifiers::NONE,
                                              line: *line });
        }
    }

    let expr = parse_expression(tokens)?;
    let line = expr.line_number();
    if let Some((next, _)) = tokens.peek()
       && (*next == Token::Equals || compound_assignment_operator(next).is_some())
    {
        return Err(ParseError::InvalidAssignmentTarget { line });
    }
    Ok(Statement::Expression { expr, line })
}

/// Parses a declaration.
///
/// Grammar:
/// ```text
/// declaration := qualifier* type? declarator ("," declarator)*
/// declarator  := identifier ("=" expression)?
/// ```
///
/// A missing type means `int`. A declarator without initializer starts at
/// zero. The qualifiers are recorded on the statement and stamped onto every
/// binary operation in the initializer.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut qualifiers = Qualifiers::NONE;
    let mut kind = None;

    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Volatile => qualifiers.is_volatile = true,
            Token::Signed => qualifiers.is_signed = true,
            Token::Unsigned => qualifiers.is_unsigned = true,
            other => match keyword_kind(other) {
                Some(declared) if kind.is_none() => kind = Some(declared),
                _ => break,
            },
        }
        tokens.next();
    }
    let kind = kind.unwrap_or(VarKind::Int);

    let mut declarations = Vec::new();
    loop {
        let (name, line) = parse_identifier(tokens)?;
        let value = if let Some((Token::Equals, _)) = tokens.peek() {
            tokens.next();
            parse_expression(tokens)?.with_qualifiers(qualifiers)
        } else {
            zero_of(kind, line)
        };
        declarations.push(Statement::Assignment { name,
                                                  value,
                                                  declared: Some(kind),
                                                  qualifiers,
                                                  line });

        if let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            continue;
        }
        break;
    }

    if declarations.len() == 1
       && let Some(declaration) = declarations.pop()
    {
        return Ok(declaration);
    }
    Ok(Statement::Sequence(declarations))
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_condition(tokens)?;
    let then_branch = Box::new(parse_statement(tokens)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_condition(tokens)?;
    let body = Box::new(parse_statement(tokens)?);
    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a C-style `for` loop.
///
/// Grammar:
/// ```text
/// for := "for" "(" simple? ";" expression? ";" simple? ")" statement
/// ```
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "'(' after for")?;

    let init = if let Some((Token::Semicolon, _)) = tokens.peek() {
        None
    } else {
        Some(Box::new(parse_simple_statement(tokens)?))
    };
    expect(tokens, &Token::Semicolon, "';' after for initializer")?;

    let condition = if let Some((Token::Semicolon, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, &Token::Semicolon, "';' after for condition")?;

    let increment = if let Some((Token::RParen, _)) = tokens.peek() {
        None
    } else {
        Some(Box::new(parse_simple_statement(tokens)?))
    };
    expect(tokens, &Token::RParen, "')' after for header")?;

    let body = Box::new(parse_statement(tokens)?);
    Ok(Statement::For { init,
                        condition,
                        increment,
                        body,
                        line })
}

/// Parses a `switch` statement.
///
/// Grammar:
/// ```text
/// switch := "switch" "(" expression ")" "{" branch* "}"
/// branch := ("case" expression | "default") ":" statement*
/// ```
fn parse_switch<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let selector = parse_condition(tokens)?;
    expect(tokens, &Token::LBrace, "'{' after switch selector")?;

    let mut cases = Vec::new();
    loop {
        let value = match tokens.next() {
            Some((Token::Case, _)) => Some(parse_expression(tokens)?),
            Some((Token::Default, _)) => None,
            Some((Token::RBrace, _)) => break,
            Some((tok, line)) => {
                return Err(ParseError::Expected { expected: "'case', 'default' or '}'",
                                                  found:    describe(tok),
                                                  line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        };
        expect(tokens, &Token::Colon, "':'")?;

        let mut body = Vec::new();
        while let Some((token, _)) = tokens.peek()
              && !matches!(token, Token::Case | Token::Default | Token::RBrace)
        {
            body.push(parse_statement(tokens)?);
        }
        cases.push(Case { value,
                          body: Statement::Sequence(body) });
    }

    Ok(Statement::Switch { selector,
                           cases,
                           line })
}

/// Parses a parenthesized condition: `"(" expression ")"`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;
    Ok(condition)
}

const fn starts_declaration(token: &Token) -> bool {
    matches!(token, Token::Volatile | Token::Signed | Token::Unsigned) || keyword_kind(token).is_some()
}

const fn keyword_kind(token: &Token) -> Option<VarKind> {
    match token {
        Token::IntKw => Some(VarKind::Int),
        Token::FloatKw => Some(VarKind::Float),
        Token::DoubleKw => Some(VarKind::Double),
        Token::BoolKw => Some(VarKind::Bool),
        Token::CharKw => Some(VarKind::Char),
        _ => None,
    }
}

/// The initial value of a declaration without initializer.
fn zero_of(kind: VarKind, line: usize) -> Expr {
    match kind {
        VarKind::Int | VarKind::Char => Expr::IntLiteral { value: 0, line },
        VarKind::Float => Expr::FloatLiteral { value: 0.0, line },
        VarKind::Double => Expr::DoubleLiteral { value: 0.0, line },
        VarKind::Bool => Expr::BoolLiteral { value: false, line },
    }
}
