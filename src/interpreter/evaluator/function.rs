use std::{
    cell::RefCell,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    ast::{Expr, FunctionDecl},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

/// A callable runtime value: either a native binding provided by the host or
/// a user-defined function.
#[derive(Clone)]
pub enum Callable {
    /// A host function such as `clock`.
    Native(&'static NativeFn),
    /// A user-defined function together with its captured defining scope.
    Function(Rc<Function>),
}

impl Callable {
    /// The number of arguments this callable declares.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native(native) => native.arity,
            Self::Function(function) => function.declaration.params.len(),
        }
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: &[Value]) -> EvalResult<Value> {
        match self {
            Self::Native(native) => (native.func)(arguments),
            Self::Function(function) => function.call(interpreter, arguments),
        }
    }
}

/// Natives compare by name, user functions by identity: two closures are
/// equal only if they are the same closure, even when created from the same
/// declaration.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a.name == b.name,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native(native) => write!(f, "Native({})", native.name),
            Self::Function(function) => write!(f, "Function({})", function.declaration.name),
        }
    }
}

impl std::fmt::Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native(_) => write!(f, "<native fn>"),
            Self::Function(function) => write!(f, "<fn {}>", function.declaration.name),
        }
    }
}

/// A function provided by the host rather than defined in the language.
pub struct NativeFn {
    /// The global name the function is bound to.
    pub name:  &'static str,
    /// The number of arguments the function accepts; enforced at the call
    /// site like any other arity.
    pub arity: usize,
    /// The host implementation. Arity has already been checked when this
    /// runs.
    pub func:  fn(&[Value]) -> EvalResult<Value>,
}

/// The native functions installed into the global scope of every
/// interpreter.
pub(in crate::interpreter::evaluator) static NATIVE_FUNCTIONS: &[NativeFn] =
    &[NativeFn { name:  "clock",
                 arity: 0,
                 func:  native_clock, },
      NativeFn { name:  "str",
                 arity: 1,
                 func:  native_str, }];

/// Seconds since the Unix epoch, as a number. Useful for crude benchmarks.
fn native_clock(_arguments: &[Value]) -> EvalResult<Value> {
    let seconds = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_or(0.0, |elapsed| elapsed.as_secs_f64());
    Ok(Value::Number(seconds))
}

/// Renders any value as a string, using the same formatting as `print`.
fn native_str(arguments: &[Value]) -> EvalResult<Value> {
    let text = arguments.first().map_or_else(String::new, ToString::to_string);
    Ok(Value::Str(Rc::from(text)))
}

/// A user-defined function value.
///
/// Pairs the shared declaration with the environment that was current when
/// the declaration executed. Capturing that environment, rather than the
/// caller's, is what gives the language lexical closures.
pub struct Function {
    pub(in crate::interpreter::evaluator) declaration: Rc<FunctionDecl>,
    pub(in crate::interpreter::evaluator) closure:     Rc<RefCell<Environment>>,
}

impl Function {
    /// Invokes the function: binds the arguments to the parameters in a fresh
    /// scope enclosing the captured closure, then runs the body.
    ///
    /// A `Return` flow out of the body becomes the call's value; falling off
    /// the end yields `nil`.
    fn call(&self, interpreter: &mut Interpreter, arguments: &[Value]) -> EvalResult<Value> {
        let mut scope = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            scope.define(param, argument.clone());
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(scope)))? {
            Flow::Return { value, .. } => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument left to right; only
    /// then is the callee checked to actually be callable and of matching
    /// arity, so argument side effects happen even for a call that fails.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       arguments: &[Expr],
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let callee = self.eval(callee)?;

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };

        if values.len() != callable.arity() {
            return Err(RuntimeError::ArityMismatch { expected: callable.arity(),
                                                     found: values.len(),
                                                     line });
        }

        callable.call(self, &values)
    }
}
