use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a logical `or` expression.
///
/// Left-associative; the short-circuit behavior lives in the evaluator, the
/// parser only records the operator.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>,
                               warnings: &mut Vec<ParseError>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens, warnings)?;

    while let Some((Token::Or, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_and(tokens, warnings)?;
        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::Or,
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses a logical `and` expression.
///
/// Grammar: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>,
                                warnings: &mut Vec<ParseError>)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_equality(tokens, warnings)?;

    while let Some((Token::And, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_equality(tokens, warnings)?;
        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::And,
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses an equality expression.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>,
                             warnings: &mut Vec<ParseError>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens, warnings)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::EqualEqual, line)) => (BinaryOperator::Equal, *line),
            Some((Token::BangEqual, line)) => (BinaryOperator::NotEqual, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_comparison(tokens, warnings)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses a comparison expression.
///
/// Grammar: `comparison := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>,
                               warnings: &mut Vec<ParseError>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, warnings)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Less, line)) => (BinaryOperator::Less, *line),
            Some((Token::LessEqual, line)) => (BinaryOperator::LessEqual, *line),
            Some((Token::Greater, line)) => (BinaryOperator::Greater, *line),
            Some((Token::GreaterEqual, line)) => (BinaryOperator::GreaterEqual, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_additive(tokens, warnings)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses an additive expression.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             warnings: &mut Vec<ParseError>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, warnings)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Plus, line)) => (BinaryOperator::Add, *line),
            Some((Token::Minus, line)) => (BinaryOperator::Sub, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_multiplicative(tokens, warnings)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses a multiplicative expression.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   warnings: &mut Vec<ParseError>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, warnings)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Star, line)) => (BinaryOperator::Mul, *line),
            Some((Token::Slash, line)) => (BinaryOperator::Div, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_unary(tokens, warnings)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}
