#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not defined anywhere on the
    /// scope chain.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to a non-numeric operand.
    OperandMustBeNumber {
        /// The operator, rendered as its lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator required two numeric operands.
    OperandsMustBeNumbers {
        /// The operator, rendered as its lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` was applied to operands that are neither two numbers nor two
    /// strings.
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not a callable value.
    NotCallable {
        /// The source line of the call's closing parenthesis.
        line: usize,
    },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        /// How many arguments the callable declares.
        expected: usize,
        /// How many arguments were actually supplied.
        found:    usize,
        /// The source line of the call's closing parenthesis.
        line:     usize,
    },
    /// A `return` unwound past the outermost function invocation.
    ReturnOutsideFunction {
        /// The source line of the `return` keyword.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },

            Self::OperandMustBeNumber { operator, line } => {
                write!(f, "Error on line {line}: Operand of '{operator}' must be a number.")
            },

            Self::OperandsMustBeNumbers { operator, line } => {
                write!(f, "Error on line {line}: Operands of '{operator}' must be numbers.")
            },

            Self::OperandsMustBeNumbersOrStrings { line } => {
                write!(f, "Error on line {line}: Operands must be two numbers or two strings.")
            },

            Self::NotCallable { line } => {
                write!(f, "Error on line {line}: Can only call functions.")
            },

            Self::ArityMismatch { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected} arguments but got {found}.")
            },

            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: Cannot return from top-level code.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
