//! # waixg
//!
//! waixg is an interpreter for a small, dynamically typed, expression-oriented
//! scripting language written in Rust. Programs are lexed, parsed with a
//! Pratt parser into an AST, and evaluated by walking the tree. The language
//! has integers, booleans, strings, first-class closures, `if`/`else`
//! expressions and `return`.
//!
//! ```
//! use waixg::{get_result, interpreter::value::core::Value};
//!
//! let source = "
//!     let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
//!     fib(10)
//! ";
//! assert_eq!(get_result(source).unwrap(), Value::Integer(55));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator},
        lexer::Lexer,
        parser::core::Parser,
        value::{
            core::Value,
            environment::Environment,
        },
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types
/// that represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator. Every node prints back as source text with
/// operator grouping made explicit.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the parse diagnostics, each carrying the line it occurred on.
/// - Defines the runtime errors carried by `Value::Error`.
/// - Combines both into the crate-level `Error` returned by [`get_result`].
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value
/// representations to provide a complete runtime for source code.
pub mod interpreter;
/// General helpers not specific to a single phase.
///
/// # Responsibilities
/// - Integer exponentiation with the language's truncation rules.
/// - Growing the native stack during deep recursion.
pub mod util;

/// Parses `source` into a program, collecting every syntax error.
///
/// Parsing never stops at the first error: malformed statements are dropped
/// and parsing resumes at the next statement. The returned program holds
/// everything that parsed successfully.
///
/// # Example
/// ```
/// let (program, errors) = waixg::parse("let x = 5; x * 2;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = 5;(x * 2)");
///
/// let (_, errors) = waixg::parse("let = 5;");
/// assert_eq!(errors[0].to_string(),
///            "Error on line 1: expected next token to be IDENT, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// An evaluator paired with a persistent global environment.
///
/// Each call to [`Session::run`] sees the bindings made by earlier calls,
/// which is what the REPL relies on.
///
/// # Example
/// ```
/// use waixg::{Session, interpreter::value::core::Value};
///
/// let mut session = Session::new();
/// session.run("let double = fn(x) { x * 2 };").unwrap();
///
/// assert_eq!(session.run("double(21)").unwrap(), Value::Integer(42));
/// assert!(session.run("triple(1)").is_err());
/// ```
pub struct Session {
    evaluator: Evaluator,
    env:       Rc<Environment>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default settings and an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    /// Creates a session whose evaluator uses `config`.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self { evaluator: Evaluator::new(config),
               env:       Environment::new(), }
    }

    /// Parses and evaluates `source` in this session's environment.
    ///
    /// If the source has syntax errors nothing is evaluated.
    ///
    /// # Returns
    /// The value of the program, `Error::Parse` with every syntax error, or
    /// `Error::Runtime` if evaluation produced an error value.
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let (program, errors) = parse(source);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "parsing failed");
            return Err(Error::Parse(errors));
        }

        tracing::debug!(statements = program.statements.len(), "evaluating program");
        match self.evaluator.eval_program(&program, &self.env) {
            Value::Error(error) => Err(Error::Runtime(error)),
            value => Ok(value),
        }
    }

    /// The global environment of this session.
    #[must_use]
    pub const fn environment(&self) -> &Rc<Environment> {
        &self.env
    }

    /// The evaluator of this session, e.g. to register builtins.
    pub const fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }
}

/// Parses and evaluates `source` in a fresh session.
///
/// # Errors
/// Returns an error if parsing fails or evaluation produces an error value.
///
/// # Examples
/// ```
/// use waixg::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("let result = 2 + 2; result").unwrap(), Value::Integer(4));
///
/// // 'x' is not defined
/// let err = get_result("let y = x + 1").unwrap_err();
/// assert_eq!(err.to_string(), "identifier not found: x");
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    Session::new().run(source)
}
