use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token if it equals `expected`, erroring otherwise.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `expected`: The token that must come next.
/// - `description`: Human-readable description used in the error message,
///   e.g. `"';' after variable declaration"`.
/// - `line`: Fallback line for the end-of-input error when the stream is
///   already exhausted.
///
/// # Returns
/// The line number of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &'static str,
                                                    line: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((token, token_line)) if token == expected => {
            let token_line = *token_line;
            tokens.next();
            Ok(token_line)
        },
        Some((token, token_line)) => Err(ParseError::Expected { expected: description,
                                                                found: token.to_string(),
                                                                line: *token_line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the next token, which must be an identifier, and returns its name
/// together with the line it appeared on.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), token_line)) => Ok((name.clone(), *token_line)),
        Some((token, token_line)) => Err(ParseError::Expected { expected: "an identifier",
                                                                found: token.to_string(),
                                                                line: *token_line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
