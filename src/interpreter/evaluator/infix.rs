use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Evaluator,
        value::core::{Value, ValueType},
    },
    util::num::truncated_pow,
};

impl Evaluator {
    /// Applies an infix operator to two already evaluated operands.
    ///
    /// Dispatch is on the pair of operand types, checked in this order:
    /// 1. both integers: arithmetic and comparisons,
    /// 2. both booleans: `==` and `!=` only,
    /// 3. both strings: `+` (concatenation) only,
    /// 4. different types: `TypeMismatch`,
    /// 5. anything else: `UnknownInfixOperator`.
    ///
    /// # Example
    /// ```
    /// use waixg::{
    ///     ast::InfixOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Plus, &Value::Integer(2), &Value::Integer(3));
    /// assert_eq!(sum, Value::Integer(5));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Slash, &Value::Integer(1), &Value::Integer(0));
    /// assert_eq!(err, Value::Error(RuntimeError::DivisionByZero));
    /// ```
    #[must_use]
    pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => Self::eval_integer_infix(operator, *l, *r),
            (Value::Boolean(l), Value::Boolean(r)) => Self::eval_boolean_infix(operator, *l, *r),
            (Value::String(l), Value::String(r)) => Self::eval_string_infix(operator, l, r),
            _ if left.value_type() != right.value_type() => {
                RuntimeError::TypeMismatch { left: left.value_type(),
                                             operator,
                                             right: right.value_type() }.into()
            },
            _ => unknown_operator(left.value_type(), operator, right.value_type()),
        }
    }

    /// Arithmetic wraps on overflow. Division truncates toward zero and `^`
    /// goes through floating point, truncating the result.
    fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Value {
        match operator {
            InfixOperator::Plus => Value::Integer(left.wrapping_add(right)),
            InfixOperator::Minus => Value::Integer(left.wrapping_sub(right)),
            InfixOperator::Asterisk => Value::Integer(left.wrapping_mul(right)),
            InfixOperator::Slash if right == 0 => RuntimeError::DivisionByZero.into(),
            InfixOperator::Slash => Value::Integer(left.wrapping_div(right)),
            InfixOperator::Caret => Value::Integer(truncated_pow(left, right)),
            InfixOperator::Eq => Value::from(left == right),
            InfixOperator::NotEq => Value::from(left != right),
            InfixOperator::Lt => Value::from(left < right),
            InfixOperator::Gt => Value::from(left > right),
            InfixOperator::LtEq => Value::from(left <= right),
            InfixOperator::GtEq => Value::from(left >= right),
        }
    }

    fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> Value {
        match operator {
            InfixOperator::Eq => Value::from(left == right),
            InfixOperator::NotEq => Value::from(left != right),
            _ => unknown_operator(ValueType::Boolean, operator, ValueType::Boolean),
        }
    }

    fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> Value {
        match operator {
            InfixOperator::Plus => Value::from(format!("{left}{right}").as_str()),
            _ => unknown_operator(ValueType::String, operator, ValueType::String),
        }
    }
}

fn unknown_operator(left: ValueType, operator: InfixOperator, right: ValueType) -> Value {
    RuntimeError::UnknownInfixOperator { left, operator, right }.into()
}
