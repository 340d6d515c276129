use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ValueType,
};

/// Represents all errors that can occur during evaluation.
///
/// A `RuntimeError` is carried inside `Value::Error` and forwarded unchanged
/// by every enclosing evaluation step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name is bound neither in the environment chain nor as a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// A binary operator was applied to operands of different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     ValueType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ValueType,
    },
    /// A prefix operator is not defined for the operand's type.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ValueType,
    },
    /// A binary operator is not defined for the operand types.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ValueType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ValueType,
    },
    /// The callee of a call expression is not callable.
    #[error("not a function: {callee}")]
    NotAFunction {
        /// Type of the value that was called.
        callee: ValueType,
    },
    /// A function was called with the wrong number of arguments.
    #[error("wrong number of arguments: expected {expected}, got {found}")]
    WrongArgumentCount {
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A builtin received an argument of a type it does not handle.
    #[error("argument to `{function}` not supported, got {found}")]
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type of the rejected argument.
        found:    ValueType,
    },
    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Function calls nested deeper than the configured maximum.
    #[error("stack depth exceeded: maximum call depth is {max_depth}")]
    StackDepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
}
