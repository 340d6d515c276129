/// Numeric helpers.
///
/// Holds the integer exponentiation used by the `^` operator, which goes
/// through floating point and truncates back to `i64`.
pub mod num;
/// Stack growth for deep recursion.
///
/// The parser and evaluator recurse once per nesting level; this module keeps
/// them from overflowing the native stack on deeply nested input.
pub mod stack;
