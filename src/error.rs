/// Lexical errors.
///
/// Defines the error kind reported by the scanner together with the offending
/// lexeme and source line. The kind enum doubles as the `logos` error type, so
/// the lexer itself produces these diagnostics instead of toggling a shared
/// error flag.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token stream.
/// Parse errors include unexpected tokens, premature end of input, invalid
/// assignment targets, and the argument/parameter list caps.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, operand type mismatches, calling non-callables, and arity
/// mismatches. Every variant carries the source line of the offending token.
pub mod runtime_error;
/// Aggregated run outcome.
///
/// Combines the per-stage diagnostics into the single error value a driver
/// receives for one run: either a syntax failure carrying every lexical and
/// parse diagnostic (plus any runtime error from executing the recovered
/// statements), or a runtime failure on an otherwise clean program.
pub mod interpret_error;

pub use interpret_error::{Diagnostics, InterpretError};
pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
