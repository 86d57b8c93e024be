/// Binary and logical operator evaluation.
///
/// Arithmetic, comparison, equality, and the short-circuiting `and`/`or`
/// operators.
pub mod binary;
/// The interpreter core.
///
/// Declares the `Interpreter` struct, the `Flow` result distinguishing normal
/// completion from an in-flight `return`, and the execution of statements and
/// simple expressions.
pub mod core;
/// Callable values.
///
/// User-defined functions with their captured closures, the native function
/// bindings installed into the global scope, and call evaluation.
pub mod function;
