/// Runtime values.
///
/// Defines the `Value` enum and its supporting types: closures, native
/// builtins, type names, and the shared `TRUE`/`FALSE`/`NULL` constants.
pub mod core;
/// Lexical environments.
///
/// Defines the chain of scopes used for variable lookup and closure capture.
pub mod environment;
