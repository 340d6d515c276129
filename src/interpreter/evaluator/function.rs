/// Built-in function implementations.
///
/// Contains `len`, `puts` and `type`, which every evaluator starts with.
pub mod builtin;

/// Call expressions and function application.
pub mod core;
