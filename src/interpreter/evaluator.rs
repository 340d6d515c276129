/// Core evaluation logic and configuration.
///
/// Contains the `Evaluator`, its configuration, interrupt propagation, and
/// the dispatch over programs, blocks, statements and expressions.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` (truthiness negation) and unary `-`.
pub mod prefix;

/// Infix operator evaluation.
///
/// Handles arithmetic, comparisons and equality, dispatched on the pair of
/// operand types.
pub mod infix;

/// Function evaluation.
///
/// Handles closure application, argument binding, arity and call-depth
/// checks, and the builtin library.
pub mod function;
