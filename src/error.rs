/// Parsing errors.
///
/// Defines the structured diagnostics the parser accumulates while reading a
/// program: unexpected tokens, tokens that cannot start an expression, and
/// integer literals that do not fit in 64 bits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every failure the evaluator can produce. These travel through the
/// evaluator as `Value::Error` rather than as Rust errors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Failure of a complete parse-and-evaluate run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source had one or more syntax errors. All of them are reported.
    #[error("{}", render_parse_errors(.0))]
    Parse(Vec<ParseError>),
    /// Evaluation produced an error value.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn render_parse_errors(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
