use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token kind was required but another one was found.
    #[error("Error on line {line}: expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The kind the grammar requires at this position.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    #[error("Error on line {line}: no prefix parse function for {kind} found")]
    NoPrefixParser {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal could not be converted to a 64-bit signed integer.
    #[error("Error on line {line}: could not parse {literal} as integer")]
    InvalidIntegerLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the diagnostic points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParser { line, .. }
            | Self::InvalidIntegerLiteral { line, .. } => *line,
        }
    }
}
