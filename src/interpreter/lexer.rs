use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]*)?", number_literal)]
    #[regex(r"[0-9]+\.[0-9]*(\.[0-9.]*)+", malformed_number)]
    Number(f64),
    /// String literal tokens, delimited by double quotes. The payload is the
    /// text between the quotes; there are no escape sequences.
    #[regex(r#""[^"]*""#, string_literal)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `and`
    #[token("and")]
    And,
    /// `class` (reserved; no grammar is attached to it)
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super` (reserved; no grammar is attached to it)
    #[token("super")]
    Super,
    /// `this` (reserved; no grammar is attached to it)
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines are skipped but advance the line counter.
    #[token("\n", newline)]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed, including newlines inside string
/// literals.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Scans a complete source string into a token stream.
///
/// Tokens are paired with the 1-based line on which they end. Lexical errors
/// do not abort the scan: a diagnostic is recorded and scanning resumes after
/// the offending lexeme, so downstream stages still receive a best-effort
/// token stream. The one exception is an unterminated string, which consumes
/// everything up to end-of-input, so the scan stops there.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The ordered token stream and any lexical diagnostics, in source order.
///
/// # Example
/// ```
/// use loxide::interpreter::lexer::{Token, scan};
///
/// let (tokens, diagnostics) = scan("print 1;");
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens,
///            vec![(Token::Print, 1), (Token::Number(1.0), 1), (Token::Semicolon, 1)]);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<(Token, usize)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(kind) => {
                diagnostics.push(LexError { kind,
                                            lexeme: lexer.slice().to_string(),
                                            line: lexer.extras.line });
                if kind == LexErrorKind::UnterminatedString {
                    break;
                }
            },
        }
    }

    (tokens, diagnostics)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = match self {
            Self::Number(value) => return write!(f, "{value}"),
            Self::Str(value) => return write!(f, "\"{value}\""),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Semicolon => ";",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            Self::Comment | Self::Newline => "",
        };
        write!(f, "{lexeme}")
    }
}

/// Parses a numeric literal from the current token slice.
fn number_literal(lex: &mut logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Rejects a numeric literal that contains a second decimal point.
fn malformed_number(_lex: &mut logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

/// Extracts the text of a terminated string literal, without the quotes,
/// and accounts for any newlines the literal spans.
fn string_literal(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Rejects a string literal that reached end-of-input before closing. The
/// match consumes the rest of the source, which is what forces the scan
/// position to end-of-input.
fn unterminated_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    lex.extras.line += lex.slice().chars().filter(|&c| c == '\n').count();
    Err(LexErrorKind::UnterminatedString)
}

/// Skips a newline while advancing the line counter.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}
