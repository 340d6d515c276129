use crate::interpreter::{
    lexer::{TokenKind, TokenSource},
    parser::core::Parser,
};

impl<S: TokenSource> Parser<S> {
    /// Parses a comma-separated list of items up to a closing token.
    ///
    /// Shared by parameter lists and call arguments. The current token must
    /// be the opening delimiter; on success the current token is `closing`.
    /// `parse_item` is invoked with the first token of each item as the
    /// current token. An immediately encountered closing token produces an
    /// empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list.
    /// - `parse_item`: Function used to parse each element.
    ///
    /// # Returns
    /// The items, or `None` if an item failed or `closing` is missing.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(&mut self,
                                                                   closing: TokenKind,
                                                                   mut parse_item: impl FnMut(&mut Self) -> Option<T>)
                                                                   -> Option<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_token_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }
        Some(items)
    }

    /// Skips the remainder of a statement that failed to parse.
    ///
    /// `base` is the brace depth the statement started at. Skipping stops on
    /// a `;` (left as the current token), or just before a `let`, a `return`
    /// or a `}` at that depth, or just before end of input. Braces opened
    /// while skipping are matched, so a broken `if` or function literal is
    /// skipped as a whole.
    ///
    /// If the failure already consumed the `}` closing the enclosing block,
    /// nothing is skipped; the block sees its depth drop below `base` and
    /// ends there.
    pub(in crate::interpreter::parser) fn synchronize(&mut self, base: usize) {
        if self.open_braces < base {
            return;
        }

        while !self.peek_token_is(TokenKind::Eof) {
            if self.open_braces == base {
                if self.cur_token_is(TokenKind::Semicolon) {
                    return;
                }
                if matches!(self.peek_token.kind, TokenKind::RBrace | TokenKind::Let | TokenKind::Return) {
                    return;
                }
            }
            self.next_token();
        }
    }
}
