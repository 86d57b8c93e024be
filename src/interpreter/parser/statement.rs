use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{parse_expression, ParseResult},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses one declaration: a `var` declaration, a `fun` declaration, or any
/// other statement.
///
/// Grammar: `declaration := var_declaration | fun_declaration | statement`
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                                warnings: &mut Vec<ParseError>)
                                -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Var, line)) => {
            let line = *line;
            tokens.next();
            parse_var_declaration(tokens, warnings, line)
        },
        Some((Token::Fun, line)) => {
            let line = *line;
            tokens.next();
            parse_function_declaration(tokens, warnings, line)
        },
        _ => parse_statement(tokens, warnings),
    }
}

/// Parses a variable declaration, the `var` keyword having already been
/// consumed.
///
/// An omitted initializer leaves the variable `nil`.
///
/// Grammar: `var_declaration := "var" IDENTIFIER ("=" expression)? ";"`
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>,
                                warnings: &mut Vec<ParseError>,
                                line: usize)
                                -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, _) = parse_identifier(tokens, line)?;

    let initializer = if let Some((Token::Equal, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens, warnings)?)
    } else {
        None
    };

    expect(tokens, &Token::Semicolon, "';' after variable declaration", line)?;
    Ok(Stmt::Var { name, initializer, line })
}

/// Parses a function declaration, the `fun` keyword having already been
/// consumed.
///
/// Parameters beyond the 255th are reported through `warnings` but still
/// accepted, mirroring the treatment of oversized argument lists.
///
/// Grammar: `fun_declaration := "fun" IDENTIFIER "(" parameters? ")" block`
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     warnings: &mut Vec<ParseError>,
                                     line: usize)
                                     -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, _) = parse_identifier(tokens, line)?;
    expect(tokens, &Token::LeftParen, "'(' after function name", line)?;

    let mut params = Vec::new();
    if let Some((Token::RightParen, _)) = tokens.peek() {
        tokens.next();
    } else {
        loop {
            if params.len() == 255 {
                let cap_line = tokens.peek().map_or(line, |(_, line)| *line);
                warnings.push(ParseError::TooManyParameters { line: cap_line });
            }

            let (param, _) = parse_identifier(tokens, line)?;
            params.push(param);

            match tokens.peek() {
                Some((Token::Comma, _)) => {
                    tokens.next();
                },
                Some((Token::RightParen, _)) => {
                    tokens.next();
                    break;
                },
                Some((token, token_line)) => {
                    return Err(ParseError::Expected { expected: "')' after parameters",
                                                      found: token.to_string(),
                                                      line: *token_line })
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            }
        }
    }

    let brace_line = expect(tokens, &Token::LeftBrace, "'{' before function body", line)?;
    let body = parse_block(tokens, warnings, brace_line)?;

    Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body, line })))
}

/// Parses one statement.
///
/// Grammar: `statement := print | block | if | while | for | return |
/// expression_statement`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              warnings: &mut Vec<ParseError>)
                              -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print(tokens, warnings, line)
        },
        Some((Token::LeftBrace, line)) => {
            let line = *line;
            tokens.next();

            let statements = parse_block(tokens, warnings, line)?;
            Ok(Stmt::Block { statements, line })
        },
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, warnings, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, warnings, line)
        },
        Some((Token::For, line)) => {
            let line = *line;
            tokens.next();
            parse_for(tokens, warnings, line)
        },
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            parse_return(tokens, warnings, line)
        },
        _ => parse_expression_statement(tokens, warnings),
    }
}

/// Parses a `print` statement, the keyword having already been consumed.
///
/// Grammar: `print := "print" expression ";"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      warnings: &mut Vec<ParseError>,
                      line: usize)
                      -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, warnings)?;
    expect(tokens, &Token::Semicolon, "';' after value", line)?;
    Ok(Stmt::Print { expr, line })
}

/// Parses the statements of a block, the opening brace having already been
/// consumed.
fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                      warnings: &mut Vec<ParseError>,
                      line: usize)
                      -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RightBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_declaration(tokens, warnings)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
}

/// Parses an `if` statement, the keyword having already been consumed.
///
/// The `else` binds to the nearest preceding `if`, which falls out of parsing
/// it greedily here.
///
/// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   warnings: &mut Vec<ParseError>,
                   line: usize)
                   -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LeftParen, "'(' after 'if'", line)?;
    let condition = parse_expression(tokens, warnings)?;
    expect(tokens, &Token::RightParen, "')' after if condition", line)?;

    let then_branch = Box::new(parse_statement(tokens, warnings)?);
    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens, warnings)?))
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `while` statement, the keyword having already been consumed.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      warnings: &mut Vec<ParseError>,
                      line: usize)
                      -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LeftParen, "'(' after 'while'", line)?;
    let condition = parse_expression(tokens, warnings)?;
    expect(tokens, &Token::RightParen, "')' after while condition", line)?;

    let body = Box::new(parse_statement(tokens, warnings)?);
    Ok(Stmt::While { condition, body, line })
}

/// Parses a `for` statement, the keyword having already been consumed.
///
/// `for` is pure syntax sugar: the loop is desugared at parse time into the
/// equivalent `while`, with the initializer in an enclosing block and the
/// increment appended to the body. The evaluator never sees a `for` node. An
/// omitted condition means an always-true loop.
///
/// Grammar: `for := "for" "(" (var_declaration | expression_statement | ";")
/// expression? ";" expression? ")" statement`
fn parse_for<'a, I>(tokens: &mut Peekable<I>,
                    warnings: &mut Vec<ParseError>,
                    line: usize)
                    -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LeftParen, "'(' after 'for'", line)?;

    let initializer = match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            None
        },
        Some((Token::Var, var_line)) => {
            let var_line = *var_line;
            tokens.next();
            Some(parse_var_declaration(tokens, warnings, var_line)?)
        },
        _ => Some(parse_expression_statement(tokens, warnings)?),
    };

    let condition = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(parse_expression(tokens, warnings)?),
    };
    expect(tokens, &Token::Semicolon, "';' after loop condition", line)?;

    let increment = match tokens.peek() {
        Some((Token::RightParen, _)) => None,
        _ => Some(parse_expression(tokens, warnings)?),
    };
    expect(tokens, &Token::RightParen, "')' after for clauses", line)?;

    let mut body = parse_statement(tokens, warnings)?;

    if let Some(increment) = increment {
        let increment_line = increment.line_number();
        body = Stmt::Block { statements: vec![body,
                                              Stmt::Expression { expr: increment,
                                                                 line: increment_line }],
                             line };
    }

    let condition = condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true),
                                                        line });
    body = Stmt::While { condition,
                         body: Box::new(body),
                         line };

    if let Some(initializer) = initializer {
        body = Stmt::Block { statements: vec![initializer, body],
                             line };
    }

    Ok(body)
}

/// Parses a `return` statement, the keyword having already been consumed.
///
/// An omitted value returns `nil`.
///
/// Grammar: `return := "return" expression? ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>,
                       warnings: &mut Vec<ParseError>,
                       line: usize)
                       -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(parse_expression(tokens, warnings)?),
    };

    expect(tokens, &Token::Semicolon, "';' after return value", line)?;
    Ok(Stmt::Return { value, line })
}

/// Parses an expression statement: an expression evaluated for its side
/// effects, with the result discarded.
///
/// Grammar: `expression_statement := expression ";"`
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     warnings: &mut Vec<ParseError>)
                                     -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);

    let expr = parse_expression(tokens, warnings)?;
    expect(tokens, &Token::Semicolon, "';' after expression", line)?;
    Ok(Stmt::Expression { expr, line })
}
