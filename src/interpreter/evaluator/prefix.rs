use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Evaluator,
        value::core::{FALSE, TRUE, Value},
    },
};

impl Evaluator {
    /// Applies a prefix operator to an already evaluated operand.
    ///
    /// - `!` yields `true` for `false` and `null`, `false` for every other
    ///   value.
    /// - `-` negates integers (wrapping on `i64::MIN`) and fails for any
    ///   other type.
    ///
    /// # Example
    /// ```
    /// use waixg::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Bang, &Value::Integer(5)),
    ///            Value::Boolean(false));
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Minus, &Value::Integer(5)),
    ///            Value::Integer(-5));
    /// ```
    #[must_use]
    pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> Value {
        match operator {
            PrefixOperator::Bang => Self::eval_bang(right),
            PrefixOperator::Minus => Self::eval_minus(right),
        }
    }

    fn eval_bang(right: &Value) -> Value {
        match right {
            Value::Boolean(value) => Value::from(!*value),
            Value::Null => TRUE,
            _ => FALSE,
        }
    }

    fn eval_minus(right: &Value) -> Value {
        match right {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            other => RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Minus,
                                                           operand:  other.value_type(), }.into(),
        }
    }
}
