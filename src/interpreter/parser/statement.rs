use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// On success the current token is the statement's last token, including
    /// any trailing `;`.
    ///
    /// # Returns
    /// The statement, or `None` if it was malformed. The diagnostic has
    /// already been recorded in that case.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.cur_token.literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_terminators();

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression>;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_terminators();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_terminators();

        Some(Statement::Expression(expression))
    }

    /// Consumes any run of `;` following a statement.
    fn skip_terminators(&mut self) {
        while self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
