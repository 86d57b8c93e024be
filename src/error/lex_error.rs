/// Classifies a malformed character sequence found while scanning.
///
/// This enum is also the error type of the `logos`-derived lexer, so every
/// failed token match carries one of these kinds. `UnexpectedCharacter` is the
/// default kind and covers any character the token grammar does not recognize.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that does not begin any recognized token.
    #[default]
    UnexpectedCharacter,
    /// A string literal that reached end-of-input before its closing quote.
    UnterminatedString,
    /// A numeric literal containing more than one decimal point.
    MalformedNumber,
}

#[derive(Debug, Clone, PartialEq)]
/// A lexical error with the offending lexeme and its source line.
pub struct LexError {
    /// What kind of malformed sequence was found.
    pub kind:   LexErrorKind,
    /// The exact source text that failed to match.
    pub lexeme: String,
    /// The source line where the error occurred.
    pub line:   usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f,
                       "Error on line {}: Unexpected character '{}'.",
                       self.line, self.lexeme)
            },
            LexErrorKind::UnterminatedString => {
                write!(f, "Error on line {}: Unterminated string.", self.line)
            },
            LexErrorKind::MalformedNumber => {
                write!(f, "Error on line {}: Invalid number '{}'.", self.line, self.lexeme)
            },
        }
    }
}

impl std::error::Error for LexError {}
