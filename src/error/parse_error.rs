#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// The token encountered, rendered as its lexeme.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    Expected {
        /// Description of the required token, e.g. `"';' after value"`.
        expected: &'static str,
        /// The token actually found, rendered as its lexeme.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left-hand side of `=` is not a plain variable reference.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied more arguments than the language permits.
    TooManyArguments {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declaration listed more parameters than permitted.
    TooManyParameters {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::Expected { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found '{found}'.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },

            Self::TooManyArguments { line } => {
                write!(f, "Error on line {line}: Cannot have more than 255 arguments.")
            },

            Self::TooManyParameters { line } => {
                write!(f, "Error on line {line}: Cannot have more than 255 parameters.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
