use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Newlines and comments are skipped; the lexer only counts lines.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Single precision literal tokens, such as `1.5f` or `2e3f`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fF]", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fF]", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fF]", parse_float)]
    Float(f32),
    /// Double precision literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_double)]
    Double(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Character literal tokens, such as `'a'` or `'\n'`.
    #[regex(r"'([^'\\\n]|\\.)'", parse_char)]
    Char(u8),
    /// String literal tokens, such as `"%d\n"`.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `int`
    #[token("int")]
    IntKw,
    /// `float`
    #[token("float")]
    FloatKw,
    /// `double`
    #[token("double")]
    DoubleKw,
    /// `bool`
    #[token("bool")]
    BoolKw,
    /// `char`
    #[token("char")]
    CharKw,
    /// `volatile`
    #[token("volatile")]
    Volatile,
    /// `signed`
    #[token("signed")]
    Signed,
    /// `unsigned`
    #[token("unsigned")]
    Unsigned,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `switch`
    #[token("switch")]
    Switch,
    /// `case`
    #[token("case")]
    Case,
    /// `default`
    #[token("default")]
    Default,
    /// `break`
    #[token("break")]
    Break,
    /// `sizeof`
    #[token("sizeof")]
    Sizeof,
    /// `print`
    #[token("print")]
    Print,
    /// `eprint`
    #[token("eprint")]
    EPrint,
    /// Identifier tokens; variable or built-in names such as `x` or `yapping`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes a whole source text into `(Token, line)` pairs.
///
/// # Errors
/// Returns the offending slice and its line if a character sequence does not
/// form a token.
///
/// # Example
/// ```
/// use brainrot::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x = 1;\nx++;").unwrap();
/// assert_eq!(tokens[0], (Token::IntKw, 1));
/// assert_eq!(tokens[5], (Token::Identifier("x".into()), 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, (String, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => return Err((lexer.slice().to_string(), lexer.extras.line)),
        }
    }

    Ok(tokens)
}

/// Parses a single precision literal, dropping the `f` suffix.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f32> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}

/// Parses a double precision literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal. Range checks against `int` happen in the
/// parser.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a character literal. Only single-byte characters are accepted.
fn parse_char(lex: &logos::Lexer<Token>) -> Option<u8> {
    let slice = lex.slice();
    let text = unescape(&slice[1..slice.len() - 1]);
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => u8::try_from(c).ok(),
        _ => None,
    }
}

/// Parses a string literal, resolving escape sequences.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Resolves backslash escapes. Unknown escapes keep the escaped character.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\u{7}'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
