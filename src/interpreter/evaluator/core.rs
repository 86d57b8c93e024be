use std::{cell::RefCell, io::Write, mem, rc::Rc};

use crate::{
    ast::{Expr, Stmt, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::{Callable, Function, NATIVE_FUNCTIONS},
        value::core::Value,
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// The control-flow outcome of executing a statement.
///
/// `return` does not unwind; it surfaces here as an ordinary result that
/// every statement-execution site inspects and propagates. A call site
/// converts `Return` back into the call's value, and the top level rejects a
/// `Return` that escaped every function.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement ran to completion.
    Normal,
    /// A `return` statement executed and is propagating toward the nearest
    /// enclosing call.
    Return {
        /// The returned value; `nil` when the statement had no expression.
        value: Value,
        /// Line of the `return` keyword, used when it escapes the top level.
        line:  usize,
    },
}

/// Executes parsed programs against a persistent global scope.
///
/// The interpreter owns the environment chain and the output sink that
/// `print` writes to. It is created once per session, so successive
/// [`interpret`](Self::interpret) calls see the globals left behind by
/// earlier ones; this is what makes definitions persist across lines of an
/// interactive session.
pub struct Interpreter {
    environment: Rc<RefCell<Environment>>,
    out:         Box<dyn Write>,
}

impl Interpreter {
    /// Creates an interpreter printing to standard output, with the native
    /// functions installed in the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Creates an interpreter printing to `out` instead of standard output.
    ///
    /// Tests use this to capture what a program prints.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));
        for native in NATIVE_FUNCTIONS {
            globals.borrow_mut()
                   .define(native.name, Value::Callable(Callable::Native(native)));
        }

        Self { environment: globals,
               out }
    }

    /// Executes `statements` in order against the current global scope.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution stops at that
    /// statement. A `return` that reaches the top level is reported as
    /// [`RuntimeError::ReturnOutsideFunction`].
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            if let Flow::Return { line, .. } = self.execute(statement)? {
                return Err(RuntimeError::ReturnOutsideFunction { line });
            }
        }
        Ok(())
    }

    /// Executes a single statement, yielding its control-flow outcome.
    pub(in crate::interpreter::evaluator) fn execute(&mut self, statement: &Stmt)
                                                     -> EvalResult<Flow> {
        match statement {
            Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },

            Stmt::Print { expr, .. } => {
                let value = self.eval(expr)?;
                // A broken output pipe is not a language-level error.
                let _ = writeln!(self.out, "{value}");
                Ok(Flow::Normal)
            },

            Stmt::Var { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name, value);
                Ok(Flow::Normal)
            },

            Stmt::Block { statements, .. } => {
                let scope = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(scope)))
            },

            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },

            Stmt::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    let flow = self.execute(body)?;
                    if let Flow::Return { .. } = flow {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            },

            Stmt::Function(declaration) => {
                let function = Function { declaration: Rc::clone(declaration),
                                          closure:     Rc::clone(&self.environment), };
                self.environment
                    .borrow_mut()
                    .define(&declaration.name,
                            Value::Callable(Callable::Function(Rc::new(function))));
                Ok(Flow::Normal)
            },

            Stmt::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return { value, line: *line })
            },
        }
    }

    /// Executes `statements` inside `scope`, restoring the previous
    /// environment afterwards whether the block completed, returned, or
    /// failed.
    pub(in crate::interpreter::evaluator) fn execute_block(&mut self,
                                                           statements: &[Stmt],
                                                           scope: Rc<RefCell<Environment>>)
                                                           -> EvalResult<Flow> {
        let previous = mem::replace(&mut self.environment, scope);

        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => {},
                other => {
                    self.environment = previous;
                    return other;
                },
            }
        }

        self.environment = previous;
        Ok(Flow::Normal)
    }

    /// Evaluates an expression to a value.
    pub(in crate::interpreter::evaluator) fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary(left, *op, right, *line),
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),

            Expr::Variable { name, line } => {
                self.environment
                    .borrow()
                    .get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },

            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                if self.environment.borrow_mut().assign(name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndefinedVariable { name: name.clone(),
                                                          line: *line, })
                }
            },

            Expr::Call { callee, arguments, line } => self.eval_call(callee, arguments, *line),
        }
    }

    fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let operand = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { operator: op.to_string(),
                                                             line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
