/// The environment module manages variable scopes at runtime.
///
/// Environments form a chain from the innermost scope out to the globals.
/// Blocks and function calls push fresh environments onto the chain, and
/// closures keep a shared handle to the environment they were defined in.
///
/// # Responsibilities
/// - Defines and resolves variable bindings along the scope chain.
/// - Distinguishes definition (creates or replaces in the current scope) from
///   assignment (overwrites an existing binding only).
/// - Shares scopes between closures and the blocks that created them.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, control flow, and `return` propagation.
/// - Reports runtime errors such as type mismatches or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Recovers at statement boundaries so one error does not hide the rest.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during interpretation and
/// execution: `nil`, booleans, numbers, strings, and callables. It also
/// defines truthiness, equality, and the textual rendering used by `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, strict equality, and display formatting.
/// - Converts literal AST values into runtime values.
pub mod value;
