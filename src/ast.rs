use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: `nil`, booleans, numbers, and strings. It is used in the AST
/// to represent literal expressions; the evaluator converts it into a runtime
/// value without further inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A numeric literal (double-precision floating point).
    Number(f64),
    /// A string literal, without its delimiting quotes.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form in the language, from literals and
/// variable references to calls and assignments. Each composite variant
/// exclusively owns its child nodes, so the tree has no sharing and no
/// cycles, and every variant carries the source line used for runtime error
/// attribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, or `nil`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x` or `!x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting logical operation (`and` / `or`).
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable.
    Assign {
        /// Name of the variable.
        name:  String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number of the `=` token.
        line:  usize,
    },
    /// A call expression (`callee(arg1, arg2, ...)`).
    Call {
        /// The expression evaluating to the callable.
        callee:    Box<Self>,
        /// Arguments, in source order.
        arguments: Vec<Self>,
        /// Line number of the closing parenthesis, used to locate call
        /// errors.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// # Example
    /// ```
    /// use loxide::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// The declaration is shared behind an `Rc` between the statement that
/// introduced it and every closure created from it, so capturing a function
/// never copies its body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements making up the function body.
    pub body:   Vec<Stmt>,
    /// Line number in the source code.
    pub line:   usize,
}

/// An abstract syntax tree node representing a statement.
///
/// Statements are the units the parser produces for a program; they execute
/// for effect and do not yield values.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `var`.
    Var {
        /// The name of the variable.
        name:        String,
        /// The initializer, or `None` to default to `nil`.
        initializer: Option<Expr>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A brace-delimited block introducing a new scope.
    Block {
        /// Statements inside the block, in order.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed when the condition is falsy, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `while` loop. `for` loops desugar into this form at parse time.
    While {
        /// The condition expression, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function declaration.
    Function(Rc<FunctionDecl>),
    /// A `return` statement, valid only inside a function body.
    Return {
        /// The returned expression, or `None` to return `nil`.
        value: Option<Expr>,
        /// Line number of the `return` keyword.
        line:  usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
