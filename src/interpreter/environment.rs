use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single lexical scope: a mapping from names to values plus a shared
/// reference to the enclosing scope.
///
/// The global environment has no enclosing reference; every other environment
/// has exactly one. Environments are shared behind `Rc<RefCell<_>>` because a
/// closure may keep its defining scope alive long after the block or call
/// that created it has finished.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use loxide::interpreter::{environment::Environment, value::core::Value};
///
/// let globals = Rc::new(RefCell::new(Environment::new()));
/// globals.borrow_mut().define("x", Value::Number(1.0));
///
/// let local = Environment::with_enclosing(Rc::clone(&globals));
/// assert_eq!(local.get("x"), Some(Value::Number(1.0)));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    values:    HashMap<String, Value>,
}

impl Environment {
    /// Creates a scope with no enclosing environment. Only the global scope
    /// is constructed this way.
    #[must_use]
    pub fn new() -> Self {
        Self { enclosing: None,
               values:    HashMap::new(), }
    }

    /// Creates a scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Rc<RefCell<Self>>) -> Self {
        Self { enclosing: Some(enclosing),
               values:    HashMap::new(), }
    }

    /// Defines `name` in this scope, overwriting any existing binding with
    /// the same name.
    ///
    /// Redefinition in the same scope is deliberate: it lets an interactive
    /// session re-enter a `var` or `fun` declaration.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks `name` up, walking the scope chain outward until a binding is
    /// found or the chain is exhausted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        self.enclosing.as_ref().and_then(|scope| scope.borrow().get(name))
    }

    /// Overwrites the nearest existing binding of `name`, walking the chain
    /// outward.
    ///
    /// Returns `false` when no scope on the chain defines `name`; assignment
    /// never creates a binding.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            return true;
        }
        self.enclosing
            .as_ref()
            .is_some_and(|scope| scope.borrow_mut().assign(name, value))
    }
}
