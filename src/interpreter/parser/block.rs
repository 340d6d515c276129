use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::Parser,
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until
    /// the closing `}` or the end of input. Malformed statements inside the
    /// block are dropped and parsing resumes after them, as at top level.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// The current token must be the opening brace; on return it is the
    /// closing brace, or `Eof` if the block was never closed. An unclosed
    /// block is reported but its statements are kept. A statement that fails
    /// on the closing brace itself, as in `{ 1 + }`, ends the block there.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        let inner = self.open_braces;
        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            } else {
                self.synchronize(inner);
                if self.open_braces < inner {
                    break;
                }
            }
            self.next_token();
        }

        if self.cur_token_is(TokenKind::Eof) {
            self.push_error(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                          found:    TokenKind::Eof,
                                                          line:     self.cur_token.line, });
        }

        block
    }
}
