use std::rc::Rc;

use crate::{
    ast::{Expression, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence},
    },
};

/// Maps a token to the prefix operator it denotes, if any.
///
/// # Example
/// ```
/// use waixg::{
///     ast::PrefixOperator,
///     interpreter::{lexer::TokenKind, parser::prefix::token_to_prefix_operator},
/// };
///
/// assert_eq!(token_to_prefix_operator(TokenKind::Bang), Some(PrefixOperator::Bang));
/// assert_eq!(token_to_prefix_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    #[allow(clippy::unnecessary_wraps)]
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(self.cur_token.literal.clone())))
    }

    /// Converts the current `Int` token to an `i64`.
    ///
    /// # Errors
    /// Records `InvalidIntegerLiteral` when the literal does not fit.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> Option<Expression> {
        if let Ok(value) = self.cur_token.literal.parse::<i64>() {
            return Some(Expression::IntegerLiteral(value));
        }
        let literal = self.cur_token.literal.clone();
        let line = self.cur_token.line;
        self.push_error(ParseError::InvalidIntegerLiteral { literal, line });
        None
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(in crate::interpreter::parser) fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::StringLiteral(self.cur_token.literal.clone()))
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(in crate::interpreter::parser) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(self.cur_token_is(TokenKind::True)))
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so only calls bind
    /// tighter: `-a * b` is `((-a) * b)` and `-f(x)` is `(-f(x))`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = token_to_prefix_operator(self.cur_token.kind)?;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses `( <expression> )`. Grouping leaves no trace in the tree.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> }
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    ///
    /// # Errors
    /// Records `UnexpectedToken` when a parenthesis or brace is missing.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses `fn(<parameters>) { <statements> }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_parameter)?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral { parameters,
                                                    body: Rc::new(body) }))
    }

    /// A parameter must be a plain identifier.
    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.cur_token_is(TokenKind::Ident) {
            return Some(Identifier::new(self.cur_token.literal.clone()));
        }
        self.push_error(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                      found:    self.cur_token.kind,
                                                      line:     self.cur_token.line, });
        None
    }
}
