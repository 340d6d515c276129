use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A scope: name bindings plus an optional link to the enclosing scope.
///
/// Environments are shared through `Rc`. A closure keeps the scope it was
/// defined in alive for as long as the closure itself is reachable, and every
/// call scope keeps its enclosing scope alive the same way.
///
/// Lookups walk outwards through the chain. Definitions always write to the
/// innermost scope and never touch an enclosing one.
///
/// # Example
/// ```
/// use waixg::interpreter::value::{core::Value, environment::Environment};
///
/// let global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let inner = Environment::new_enclosed(global.clone());
/// inner.set("x", Value::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Value::Integer(2)));
/// assert_eq!(global.get("x"), Some(Value::Integer(1)));
/// assert_eq!(inner.get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Self>>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an empty scope enclosed by `outer`.
    #[must_use]
    pub fn new_enclosed(outer: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::default(),
                       outer: Some(outer), })
    }

    /// Looks `name` up in this scope, then in each enclosing scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` in this scope, replacing any previous binding in this
    /// scope only, and returns the bound value.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.store.borrow_mut().insert(name.into(), value.clone());
        value
    }
}
