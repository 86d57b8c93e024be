/// Precedence climbing for binary and logical operators.
///
/// Contains one parse function per precedence level, from logical `or` down
/// to multiplication, each building left-associative expression trees.
pub mod binary;
/// Entry points and expression-level parsing.
///
/// Declares the `ParseResult` alias, the whole-program entry point with
/// statement-boundary recovery, and assignment parsing (the lowest
/// precedence level, right-associative).
pub mod core;
/// Statement and declaration parsing.
///
/// Parses `var` and `fun` declarations and every statement form, including
/// the parse-time desugaring of `for` loops into blocks and `while` loops.
pub mod statement;
/// Unary, call, and primary expression parsing.
///
/// The highest precedence levels: prefix operators, postfix call argument
/// lists, and atomic expressions such as literals and groupings.
pub mod unary;
/// Shared low-level parsing utilities.
///
/// Token-expectation and identifier helpers used across the parser modules.
pub mod utils;
