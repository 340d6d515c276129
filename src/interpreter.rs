/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator walks the AST produced by the parser, evaluates statements
/// and expressions against an environment, applies closures and builtins,
/// and produces a single value per program.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Propagates `return` and runtime errors as values.
/// - Enforces the configured call-depth limit.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// corresponding to an identifier, keyword, literal, operator or delimiter.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with a line number.
/// - Classifies identifiers as keywords.
/// - Turns unrecognised characters into `Illegal` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: each token kind may have a prefix and an infix parse
/// rule, and binding power decides how far an expression extends.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records syntax errors with line information and keeps going.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum, the user-defined function and
/// builtin representations, and the lexically scoped environment that maps
/// names to values.
pub mod value;
