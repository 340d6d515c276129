use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Only operators, delimiters, identifiers and literals are produced by the
/// generated scanner. Keyword kinds (`Function`, `Let`, ...) are assigned
/// afterwards by [`lookup_ident`], and `Eof`/`Illegal` are synthesized by
/// [`Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A character sequence the scanner does not recognize.
    Illegal,
    /// End of input. Repeats forever once reached.
    Eof,

    /// Identifier tokens such as `x`, `add` or `foo_bar`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal tokens such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens such as `"hello"`.
    #[regex(r#""[^"]*""#, |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
    })]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>=`
    #[token(">=")]
    GtEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,

    /// Line breaks. Never emitted, only counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Bang => "!",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        };
        f.write_str(name)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single token: its kind, the source text it was read from and the line
/// it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The literal text. String literals exclude the surrounding quotes.
    pub literal: String,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

/// A pull-based source of tokens.
///
/// Implementations must keep returning a [`TokenKind::Eof`] token once the
/// input is exhausted; the parser relies on it at every lookahead point.
pub trait TokenSource {
    /// Produces the next token.
    fn next_token(&mut self) -> Token;
}

/// Classifies an identifier as a keyword or a plain identifier.
///
/// Keywords are matched case-insensitively, so `LET` and `Fn` are keywords
/// too.
///
/// # Example
/// ```
/// use waixg::interpreter::lexer::{TokenKind, lookup_ident};
///
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("RETURN"), TokenKind::Return);
/// assert_eq!(lookup_ident("answer"), TokenKind::Ident);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident.to_ascii_lowercase().as_str() {
        "fn" => TokenKind::Function,
        "let" => TokenKind::Let,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        _ => TokenKind::Ident,
    }
}

/// Scans source text into [`Token`]s.
///
/// # Example
/// ```
/// use waixg::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().kind, TokenKind::Int);
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::new(TokenKind::Eof, "", self.inner.extras.line);
        };

        let slice = self.inner.slice();
        let line = self.inner.extras.line;

        match result {
            Ok(TokenKind::Ident) => Token::new(lookup_ident(slice), slice, line),
            Ok(TokenKind::String) => {
                let literal = &slice[1..slice.len() - 1];
                let start = line - literal.chars().filter(|&c| c == '\n').count();
                Token::new(TokenKind::String, literal, start)
            },
            Ok(kind) => Token::new(kind, slice, line),
            // An unterminated string swallows the rest of the input.
            Err(()) if slice.starts_with('"') => {
                self.inner.bump(self.inner.remainder().len());
                let slice = self.inner.slice();
                self.inner.extras.line += slice.chars().filter(|&c| c == '\n').count();
                Token::new(TokenKind::Illegal, slice, line)
            },
            Err(()) => Token::new(TokenKind::Illegal, slice, line),
        }
    }
}
