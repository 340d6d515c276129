use crate::{
    error::RuntimeError,
    interpreter::value::core::{Builtin, NULL, Value},
};

/// Defines the standard builtins by generating `STANDARD_BUILTINS`, the table
/// every evaluator is seeded with.
macro_rules! standard_builtins {
    ($($name:literal => $func:expr),* $(,)?) => {
        /// Builtins registered in every new evaluator.
        pub const STANDARD_BUILTINS: &[Builtin] = &[
            $(
                Builtin { name: $name, func: $func },
            )*
        ];
    };
}

standard_builtins! {
    "len" => len,
    "puts" => puts,
    "type" => type_of,
}

/// Returns the number of characters in a string.
///
/// # Example
/// ```
/// use waixg::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("héllo")]), Value::Integer(5));
/// assert!(len(&[Value::Integer(1)]).is_error());
/// ```
#[must_use]
pub fn len(args: &[Value]) -> Value {
    match single_argument(args) {
        Ok(Value::String(text)) => Value::Integer(i64::try_from(text.chars().count()).unwrap_or(i64::MAX)),
        Ok(other) => RuntimeError::UnsupportedArgument { function: "len",
                                                         found:    other.value_type(), }.into(),
        Err(error) => error.into(),
    }
}

/// Writes each argument on its own line to standard output and returns
/// `null`.
pub fn puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{arg}");
    }
    NULL
}

/// Returns the type name of its argument as a string, e.g. `"INTEGER"`.
///
/// # Example
/// ```
/// use waixg::interpreter::{evaluator::function::builtin::type_of, value::core::Value};
///
/// assert_eq!(type_of(&[Value::Boolean(true)]), Value::from("BOOLEAN"));
/// ```
#[must_use]
pub fn type_of(args: &[Value]) -> Value {
    match single_argument(args) {
        Ok(arg) => Value::from(arg.value_type().to_string().as_str()),
        Err(error) => error.into(),
    }
}

fn single_argument(args: &[Value]) -> Result<&Value, RuntimeError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(RuntimeError::WrongArgumentCount { expected: 1,
                                                    found:    args.len(), }),
    }
}
