use pretty_assertions::assert_eq;
use waixg::interpreter::lexer::{Lexer, Token, TokenKind, TokenSource};

fn tokens(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        out.push(token);
        if done {
            return out;
        }
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|t| t.kind).collect()
}

#[test]
fn operators_and_delimiters() {
    use TokenKind::*;

    assert_eq!(kinds("=+-*/^!<>,;(){}[]"),
               vec![Assign, Plus, Minus, Asterisk, Slash, Caret, Bang, Lt, Gt, Comma, Semicolon,
                    LParen, RParen, LBrace, RBrace, LBracket, RBracket, Eof]);
    assert_eq!(kinds("== != <= >= = !"),
               vec![Eq, NotEq, LtEq, GtEq, Assign, Bang, Eof]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;

    assert_eq!(kinds("fn let true false if else return foo_bar x1"),
               vec![Function, Let, True, False, If, Else, Return, Ident, Ident, Eof]);
    assert_eq!(kinds("LET Fn RETURN"), vec![Let, Function, Return, Eof]);
}

#[test]
fn literals_keep_their_text() {
    let toks = tokens(r#"let five = 5; "hello world""#);

    assert_eq!(toks[1], Token::new(TokenKind::Ident, "five", 1));
    assert_eq!(toks[3], Token::new(TokenKind::Int, "5", 1));
    assert_eq!(toks[5], Token::new(TokenKind::String, "hello world", 1));
}

#[test]
fn empty_string_literal() {
    let toks = tokens(r#""""#);
    assert_eq!(toks[0], Token::new(TokenKind::String, "", 1));
}

#[test]
fn tracks_lines() {
    let toks = tokens("let a = 1;\n\nlet b = 2;\n\"x\ny\" c");
    let lines: Vec<usize> = toks.iter().map(|t| t.line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 4, 5, 5]);
}

#[test]
fn unknown_characters_are_illegal() {
    let toks = tokens("1 @ 2");

    assert_eq!(toks[1].kind, TokenKind::Illegal);
    assert_eq!(toks[1].literal, "@");
    assert_eq!(toks[2].kind, TokenKind::Int);
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("");
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn unterminated_string_is_illegal() {
    assert_eq!(tokens("\"abc def"),
               vec![Token::new(TokenKind::Illegal, "\"abc def", 1), Token::new(TokenKind::Eof, "", 1)]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(tokens("let s = \"ab\ncd;"),
               vec![Token::new(TokenKind::Let, "let", 1),
                    Token::new(TokenKind::Ident, "s", 1),
                    Token::new(TokenKind::Assign, "=", 1),
                    Token::new(TokenKind::Illegal, "\"ab\ncd;", 1),
                    Token::new(TokenKind::Eof, "", 2),]);
}
