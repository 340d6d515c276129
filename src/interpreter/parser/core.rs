use std::mem;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, TokenSource},
    util::stack::ensure_sufficient_stack,
};

/// Binding power of an operator, from loosest to tightest.
///
/// The derived ordering is the precedence ordering: `Lowest < Equals <
/// LessGreater < Sum < Product < Exponent < Prefix < Call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Default floor; binds nothing.
    Lowest,
    /// `==` and `!=`.
    Equals,
    /// `<`, `>`, `<=` and `>=`.
    LessGreater,
    /// `+` and `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// `^`.
    Exponent,
    /// Unary `-` and `!`.
    Prefix,
    /// Function application, `f(x)`.
    Call,
}

impl Precedence {
    /// Returns the precedence of `kind` in infix position.
    ///
    /// Tokens that cannot continue an expression have [`Precedence::Lowest`],
    /// which ends the expression loop.
    ///
    /// # Example
    /// ```
    /// use waixg::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::LParen), Precedence::Call);
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::Caret => Self::Exponent,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Parses an expression starting at the current token.
pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;

/// Continues an expression whose left-hand side is already parsed. Called
/// with the operator as the current token.
pub type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

/// A Pratt (operator-precedence) parser over a [`TokenSource`].
///
/// The parser keeps two tokens of context, the current token and the next
/// one. Parse functions start with their first token as the current token
/// and finish with their last token as the current token.
///
/// Malformed statements do not stop the parser: each failure is recorded as
/// a [`ParseError`], the statement is dropped, and parsing resumes at the
/// next statement.
///
/// # Example
/// ```
/// use waixg::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<S> {
    source: S,
    /// The token under the cursor.
    pub(in crate::interpreter::parser) cur_token: Token,
    /// One token of lookahead.
    pub(in crate::interpreter::parser) peek_token: Token,
    /// Braces opened and not yet closed, up to and including `cur_token`.
    pub(in crate::interpreter::parser) open_braces: usize,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and reads the first two tokens from `source`.
    pub fn new(mut source: S) -> Self {
        let cur_token = source.next_token();
        let peek_token = source.next_token();
        let mut parser = Self { source,
                                cur_token,
                                peek_token,
                                open_braces: 0,
                                errors: Vec::new() };
        parser.track_braces();
        parser
    }

    /// Diagnostics recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the returned program;
    /// the reason is available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            let base = self.open_braces;
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(base),
            }
            self.next_token();
        }

        tracing::trace!(statements = program.statements.len(),
                        errors = self.errors.len(),
                        "parsed program");
        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token must start the expression. The prefix function for
    /// its kind produces the left operand; then, while the next token is an
    /// infix operator binding tighter than `precedence`, the matching infix
    /// function folds the left operand into a larger expression. Infix
    /// functions parse their right operand at their own precedence, which
    /// makes operators of equal precedence associate to the left.
    ///
    /// # Parameters
    /// - `precedence`: The binding-power floor.
    ///
    /// # Returns
    /// The parsed expression, or `None` after recording a diagnostic.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| {
            let Some(prefix) = Self::prefix_parse_fn(self.cur_token.kind) else {
                self.push_error(ParseError::NoPrefixParser { kind: self.cur_token.kind,
                                                             line: self.cur_token.line, });
                return None;
            };
            let mut left = prefix(self)?;

            while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                let Some(infix) = Self::infix_parse_fn(self.peek_token.kind) else {
                    return Some(left);
                };
                self.next_token();
                left = infix(self, left)?;
            }

            Some(left)
        })
    }

    /// The prefix (expression-starting) rule for each token kind.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<S>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::String => Some(Self::parse_string_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    /// The infix (expression-continuing) rule for each token kind.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<S>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Caret
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LtEq
            | TokenKind::GtEq => Some(Self::parse_infix_expression),
            TokenKind::LParen => Some(Self::parse_call_expression),
            _ => None,
        }
    }

    /// Advances the cursor by one token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.source.next_token();
        self.cur_token = mem::replace(&mut self.peek_token, next);
        self.track_braces();
    }

    /// Counts the brace that just became the current token. A stray `}`
    /// leaves the count at zero.
    fn track_braces(&mut self) {
        match self.cur_token.kind {
            TokenKind::LBrace => self.open_braces += 1,
            TokenKind::RBrace => self.open_braces = self.open_braces.saturating_sub(1),
            _ => {},
        }
    }

    pub(in crate::interpreter::parser) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the next token is of kind `kind`; otherwise records an
    /// unexpected-token diagnostic and stays put.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            return true;
        }
        self.push_error(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek_token.kind,
                                                      line:     self.peek_token.line, });
        false
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    pub(in crate::interpreter::parser) const fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    pub(in crate::interpreter::parser) fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }
}
