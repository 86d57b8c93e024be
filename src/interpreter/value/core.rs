use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::evaluator::function::Callable};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditions. There is no implicit
/// conversion between variants; every operator site matches exhaustively on
/// the kinds it accepts.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// negation (`!`).
    Bool(bool),
    /// A numeric value (double-precision floating point).
    Number(f64),
    /// An immutable string. Shared so that copies made by variable reads and
    /// concatenation inputs do not reallocate.
    Str(Rc<str>),
    /// A callable value: a user-defined function or a native binding.
    Callable(Callable),
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(Rc::from(s.as_str())),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl Value {
    /// Maps this value to a boolean for use in conditions.
    ///
    /// `nil`, `false`, and the number `0` are falsy; every other value,
    /// including the empty string, is truthy. Treating `0` as falsy is
    /// unusual for this language family but is the documented behavior and
    /// is preserved deliberately; see the truthiness tests.
    ///
    /// # Example
    /// ```
    /// use loxide::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Str(_) | Self::Callable(_) => true,
        }
    }
}

/// Strict equality: `nil` equals only `nil`, cross-kind comparisons are never
/// equal, and there is no numeric/string coercion. Functions compare by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a == b,
            _ => false,
        }
    }
}

/// Renders the value the way `print` shows it: `nil` as the literal text
/// `nil`, whole numbers without a trailing `.0`, strings without quotes, and
/// callables as `<fn name>` or `<native fn>`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{n:.0}")
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Callable(callable) => write!(f, "{callable}"),
        }
    }
}
