use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{parse_expression, ParseResult},
    },
};

/// Parses a unary expression.
///
/// Prefix operators nest, so `!!ready` and `--n` parse as expected.
///
/// Grammar: `unary := ("-" | "!") unary | call`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                          warnings: &mut Vec<ParseError>)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Bang, line)) => Some((UnaryOperator::Not, *line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        tokens.next();

        let expr = parse_unary(tokens, warnings)?;
        return Ok(Expr::Unary { op,
                                expr: Box::new(expr),
                                line });
    }

    parse_call(tokens, warnings)
}

/// Parses a call expression: a primary followed by any number of argument
/// lists.
///
/// The loop makes curried-style chains such as `resolver(name)(scope)` work;
/// each `(` found after a complete expression starts another call with the
/// previous result as the callee.
///
/// Grammar: `call := primary ("(" arguments? ")")*`
fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                     warnings: &mut Vec<ParseError>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens, warnings)?;

    while let Some((Token::LeftParen, _)) = tokens.peek() {
        tokens.next();
        expr = finish_call(tokens, warnings, expr)?;
    }

    Ok(expr)
}

/// Parses the argument list of a call, the opening parenthesis having already
/// been consumed.
///
/// Arguments beyond the 255th are still parsed and passed along; the excess
/// is reported through `warnings` rather than aborting the parse, so the rest
/// of the program is still checked.
fn finish_call<'a, I>(tokens: &mut Peekable<I>,
                      warnings: &mut Vec<ParseError>,
                      callee: Expr)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();

    if let Some((Token::RightParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        return Ok(Expr::Call { callee: Box::new(callee),
                               arguments,
                               line });
    }

    loop {
        if arguments.len() == 255 {
            let line = tokens.peek().map_or(0, |(_, line)| *line);
            warnings.push(ParseError::TooManyArguments { line });
        }
        arguments.push(parse_expression(tokens, warnings)?);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RightParen, line)) => {
                let line = *line;
                tokens.next();
                return Ok(Expr::Call { callee: Box::new(callee),
                                       arguments,
                                       line });
            },
            Some((token, line)) => {
                return Err(ParseError::Expected { expected: "')' after arguments",
                                                  found: token.to_string(),
                                                  line: *line })
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: callee.line_number() }),
        }
    }
}

/// Parses a primary expression: a literal, a variable reference, or a
/// parenthesized grouping.
///
/// Grammar: `primary := "true" | "false" | "nil" | NUMBER | STRING |
/// IDENTIFIER | "(" expression ")"`
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                            warnings: &mut Vec<ParseError>)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::False, line)) => {
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(false),
                               line })
        },
        Some((Token::True, line)) => {
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(true),
                               line })
        },
        Some((Token::Nil, line)) => {
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Nil,
                               line })
        },
        Some((Token::Number(n), line)) => {
            let (n, line) = (*n, *line);
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Number(n),
                               line })
        },
        Some((Token::Str(s), line)) => {
            let (s, line) = (s.clone(), *line);
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Str(s),
                               line })
        },
        Some((Token::Identifier(name), line)) => {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        Some((Token::LeftParen, line)) => {
            let line = *line;
            tokens.next();

            let expr = parse_expression(tokens, warnings)?;
            match tokens.peek() {
                Some((Token::RightParen, _)) => {
                    tokens.next();
                    Ok(Expr::Grouping { expr: Box::new(expr),
                                        line })
                },
                Some((token, token_line)) => {
                    Err(ParseError::Expected { expected: "')' after expression",
                                               found: token.to_string(),
                                               line: *token_line })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line }),
            }
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
