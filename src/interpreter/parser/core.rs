use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_declaration},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: declarations until the token stream is exhausted.
///
/// This is the parser's entry point. A parse error inside one declaration
/// does not abort the program: the error is recorded, the token stream is
/// advanced to the next statement boundary via [`synchronize`], and parsing
/// resumes, so independent errors in one source are all reported and the
/// well-formed statements are still produced.
///
/// Trailing tokens after a complete program are not tolerated; they enter
/// declaration parsing like any other input and fail normally.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements that parsed successfully and every diagnostic collected,
/// both in source order. The parse counts as failed for the run when the
/// diagnostics list is non-empty.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Vec<Stmt>, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    let mut diagnostics = Vec::new();

    while tokens.peek().is_some() {
        match parse_declaration(tokens, &mut diagnostics) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                diagnostics.push(error);
                synchronize(tokens);
            },
        }
    }

    (statements, diagnostics)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `warnings`: Sink for non-fatal diagnostics such as the argument cap.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               warnings: &mut Vec<ParseError>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens, warnings)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = c` assigns `c` to `b`, then the
/// result to `a`. The left-hand side is parsed as an ordinary expression
/// first; it is only a valid target if it turned out to be a bare variable
/// reference. Any other shape is an invalid assignment target.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Errors
/// - `InvalidAssignmentTarget` when the left-hand side is not a variable.
/// - Propagates any errors from sub-expression parsing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           warnings: &mut Vec<ParseError>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_logical_or(tokens, warnings)?;

    if let Some((Token::Equal, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens, warnings)?;
        return match expr {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                             value: Box::new(value),
                                                             line }),
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(expr)
}

/// Discards tokens until a likely statement boundary.
///
/// Called after a parse error so that one malformed statement does not
/// cascade into spurious errors for the rest of the program. The boundary is
/// either a semicolon (consumed) or a token that begins a new declaration or
/// statement (left in place).
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::Class
            | Token::Fun
            | Token::Var
            | Token::For
            | Token::If
            | Token::While
            | Token::Print
            | Token::Return => return,
            _ => {
                tokens.next();
            },
        }
    }
}
