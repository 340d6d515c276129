use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator, including
/// `(`, which continues an expression as a call instead.
///
/// # Example
/// ```
/// use waixg::{
///     ast::InfixOperator,
///     interpreter::{lexer::TokenKind, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::Caret), Some(InfixOperator::Caret));
/// assert_eq!(token_to_infix_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Caret => Some(InfixOperator::Caret),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::LtEq => Some(InfixOperator::LtEq),
        TokenKind::GtEq => Some(InfixOperator::GtEq),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    /// Parses the right operand of a binary operator and joins it with
    /// `left`.
    ///
    /// The right operand is parsed with the operator's own precedence as the
    /// floor, so a following operator of the same level is not absorbed
    /// into it: `a - b - c` is `((a - b) - c)`, and `2 ^ 3 ^ 2` is
    /// `((2 ^ 3) ^ 2)`.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression)
                                                                 -> Option<Expression> {
        let operator = token_to_infix_operator(self.cur_token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// Parses the argument list of a call; `(` is the current token and
    /// `function` is the callee already parsed.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expression)
                                                                -> Option<Expression> {
        let arguments = self.parse_comma_separated(TokenKind::RParen, |parser| {
                                 parser.parse_expression(Precedence::Lowest)
                             })?;

        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }
}
