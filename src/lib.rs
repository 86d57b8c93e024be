//! # loxide
//!
//! loxide is a tree-walking interpreter for the Lox scripting language,
//! written in Rust. It scans, parses, and executes dynamically typed programs
//! with variables, lexical scoping, control flow, and first-class functions
//! with closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::{Diagnostics, InterpretError},
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, offending lexemes, and source locations
/// for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Aggregates per-run diagnostics so callers receive every error at once.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution. It exposes the
/// public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// An interpreter session: scanning, parsing, and execution against one
/// persistent global scope.
///
/// A session outlives individual [`run`](Self::run) calls, so variables and
/// functions defined by one call are visible to the next. A script runner
/// uses a session for one file; an interactive prompt keeps a single session
/// alive for its whole lifetime.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Creates a session whose programs print to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { interpreter: Interpreter::new() }
    }

    /// Creates a session whose programs print to `out` instead of standard
    /// output.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self { interpreter: Interpreter::with_output(out) }
    }

    /// Scans, parses, and executes one source unit.
    ///
    /// All lexical and parse diagnostics for the unit are collected before
    /// anything runs. The statements that parsed cleanly are then executed
    /// even when other statements were malformed, so an interactive session
    /// keeps as much of the input as possible; the run still reports failure
    /// with every collected diagnostic.
    ///
    /// # Errors
    /// [`InterpretError::Syntax`] when any lexical or parse diagnostic was
    /// collected, [`InterpretError::Runtime`] when a clean program failed
    /// during evaluation.
    ///
    /// # Examples
    /// ```
    /// use loxide::Session;
    ///
    /// let mut session = Session::new();
    /// assert!(session.run("var x = 2;").is_ok());
    ///
    /// // Definitions persist across calls on the same session.
    /// assert!(session.run("print x + 1;").is_ok());
    ///
    /// // 'y' is not defined anywhere on the scope chain.
    /// assert!(session.run("print y;").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<(), InterpretError> {
        let (tokens, lex) = scan(source);

        let mut iter = tokens.iter().peekable();
        let (statements, parse) = parse_program(&mut iter);

        let mut diagnostics = Diagnostics { lex,
                                            parse,
                                            runtime: None };

        if diagnostics.is_clean() {
            self.interpreter
                .interpret(&statements)
                .map_err(InterpretError::Runtime)
        } else {
            diagnostics.runtime = self.interpreter.interpret(&statements).err();
            Err(InterpretError::Syntax(diagnostics))
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a complete program in a fresh session.
///
/// This is the one-shot entry point for callers that do not need the session
/// to persist; each call starts from a clean global scope containing only the
/// native functions.
///
/// # Errors
/// Returns an error if scanning or parsing produced diagnostics, or if any
/// runtime error occurred.
///
/// # Examples
/// ```
/// use loxide::run_program;
///
/// assert!(run_program("print 1 + 2;").is_ok());
///
/// // 'x' is not defined.
/// assert!(run_program("print x;").is_err());
/// ```
pub fn run_program(source: &str) -> Result<(), InterpretError> {
    Session::new().run(source)
}
