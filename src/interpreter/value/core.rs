use std::{fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::value::environment::Environment,
};

/// The boolean `true`. Every boolean produced by evaluation is one of these
/// two constants.
pub const TRUE: Value = Value::Boolean(true);
/// The boolean `false`.
pub const FALSE: Value = Value::Boolean(false);
/// The absence of a value: the result of an `if` without a taken branch, of
/// an empty block, or of `puts`.
pub const NULL: Value = Value::Null;

/// Signature of a native builtin.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// Represents a runtime value in the interpreter.
///
/// `Return` and `Error` are *interrupts*: whenever an evaluation step sees
/// one, it stops and hands it to its caller unchanged. `Return` is unwrapped
/// only when it reaches a function-call boundary (or the end of the program);
/// `Error` travels all the way to the caller of the evaluator.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean. See [`TRUE`] and [`FALSE`].
    Boolean(bool),
    /// See [`NULL`].
    Null,
    /// A value travelling out of a function body through a `return`.
    Return(Box<Self>),
    /// A runtime error travelling to the top.
    Error(RuntimeError),
    /// A closure.
    Function(Rc<Function>),
    /// An immutable string.
    String(Rc<str>),
    /// A native function.
    Builtin(Builtin),
}

/// A user-defined function together with the environment it was defined in.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body, shared with the literal it was evaluated from.
    pub body:       Rc<BlockStatement>,
    /// The scope active where the function literal was evaluated. Calls
    /// enclose this scope, never the caller's.
    pub env:        Rc<Environment>,
}

// The captured environment may contain this very function; printing it would
// never terminate.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// A named native function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is registered under.
    pub name: &'static str,
    /// The implementation.
    pub func: BuiltinFn,
}

/// The type of a [`Value`], as shown in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `ERROR`
    Error,
    /// `FUNCTION`
    Function,
    /// `STRING`
    String,
    /// `BUILTIN`
    Builtin,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Integer => "INTEGER",
                        Self::Boolean => "BOOLEAN",
                        Self::Null => "NULL",
                        Self::ReturnValue => "RETURN_VALUE",
                        Self::Error => "ERROR",
                        Self::Function => "FUNCTION",
                        Self::String => "STRING",
                        Self::Builtin => "BUILTIN",
                    })
    }
}

impl From<bool> for Value {
    /// Maps a native boolean onto [`TRUE`] or [`FALSE`].
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Null => ValueType::Null,
            Self::Return(_) => ValueType::ReturnValue,
            Self::Error(_) => ValueType::Error,
            Self::Function(_) => ValueType::Function,
            Self::String(_) => ValueType::String,
            Self::Builtin(_) => ValueType::Builtin,
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// `null` and `false` are falsy; everything else, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use waixg::interpreter::value::core::{FALSE, NULL, TRUE, Value};
    ///
    /// assert!(TRUE.is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Whether this value stops the evaluation of its siblings.
    #[must_use]
    pub const fn is_interrupt(&self) -> bool {
        matches!(self, Self::Return(_) | Self::Error(_))
    }

    /// Whether this value is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Strips a `Return` wrapper. Any other value is returned as is.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }
}

/// Equality as observed by the language and by tests: scalars and strings by
/// value, closures by identity, builtins by name.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
            Self::Function(function) => {
                f.write_str("fn(")?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {}", function.body)
            },
            Self::String(s) => f.write_str(s),
            Self::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
