/// Core value types.
///
/// Declares the `Value` enum covering every runtime type in the language and
/// its conversion, truthiness, equality, and text-rendering rules.
pub mod core;
