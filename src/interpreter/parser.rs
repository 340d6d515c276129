/// Parser state, precedence levels, and the Pratt expression loop.
///
/// Holds the token cursor (current and next token), the tables mapping token
/// kinds to prefix and infix parse functions, and the diagnostics collected
/// so far.
pub mod core;

/// Prefix parse functions.
///
/// Everything that can start an expression: literals, identifiers, prefix
/// operators, grouping, `if` and function literals.
pub mod prefix;

/// Infix parse functions.
///
/// Binary operators and function application, each continuing an expression
/// whose left-hand side has already been parsed.
pub mod infix;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and function
/// bodies.
pub mod block;

/// Statement parsing.
///
/// Implements `let`, `return`, and expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the comma-separated list helper and statement-level error
/// recovery.
pub mod utils;
