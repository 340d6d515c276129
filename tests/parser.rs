use pretty_assertions::assert_eq;
use waixg::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    error::ParseError,
    interpreter::lexer::TokenKind,
    parse,
};

fn parse_ok(src: &str) -> Program {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected parse errors for {src:?}: {errors:?}");
    program
}

fn render(src: &str) -> String {
    parse_ok(src).to_string()
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

#[test]
fn let_and_return_statements() {
    let program = parse_ok("let x = 5; let y = true; return x;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  Identifier::new("x"),
                                     value: Expression::IntegerLiteral(5), },
                    Statement::Let { name:  Identifier::new("y"),
                                     value: Expression::BooleanLiteral(true), },
                    Statement::Return { value: ident("x") },]);
}

#[test]
fn prefix_expressions() {
    let program = parse_ok("!5; -a;");

    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::Prefix { operator: PrefixOperator::Bang,
                                                               right:    Box::new(Expression::IntegerLiteral(5)), }),
                    Statement::Expression(Expression::Prefix { operator: PrefixOperator::Minus,
                                                               right:    Box::new(ident("a")), }),]);
}

#[test]
fn infix_expression_tree() {
    let program = parse_ok("a <= b");

    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::Infix { left:     Box::new(ident("a")),
                                                              operator: InfixOperator::LtEq,
                                                              right:    Box::new(ident("b")), })]);
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 >= 4 != 3 <= 4", "((5 >= 4) != (3 <= 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true != false", "(true != false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("2 * 3 ^ 2", "(2 * (3 ^ 2))"),
                 ("2 ^ 3 ^ 2", "((2 ^ 3) ^ 2)"),
                 ("-2 ^ 2", "((-2) ^ 2)"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("-f(x)", "(-f(x))")];

    for (src, expected) in cases {
        assert_eq!(render(src), expected, "source: {src}");
    }
}

#[test]
fn if_expressions() {
    assert_eq!(render("if (x < y) { x }"), "if (x < y) { x }");
    assert_eq!(render("if (x < y) { x } else { y }"), "if (x < y) { x } else { y }");
    assert_eq!(render("if (x) { }"), "if x { }");
}

#[test]
fn function_literals_and_calls() {
    assert_eq!(render("fn(x, y) { x + y; }"), "fn(x, y) { (x + y) }");
    assert_eq!(render("fn() {}"), "fn() { }");
    assert_eq!(render("fn(x) { return x; }(5)"), "fn(x) { return x; }(5)");
    assert_eq!(render("add()"), "add()");
    assert_eq!(render("f(1)(2)"), "f(1)(2)");
}

#[test]
fn string_literals() {
    let program = parse_ok(r#""hello world";"#);
    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::StringLiteral("hello world".to_string()))]);
    assert_eq!(program.to_string(), r#""hello world""#);
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(render("let x = 1\nx"), "let x = 1;x");
    assert_eq!(render("1;;;2"), "12");
}

#[test]
fn missing_prefix_rule() {
    let (_, errors) = parse("let x = ;");

    assert_eq!(errors,
               vec![ParseError::NoPrefixParser { kind: TokenKind::Semicolon,
                                                 line: 1, }]);
    assert_eq!(errors[0].to_string(),
               "Error on line 1: no prefix parse function for ; found");
}

#[test]
fn unexpected_token() {
    let (_, errors) = parse("let 5 = 3;");

    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                             found:    TokenKind::Int,
                                             line:     1, });
    assert_eq!(errors[0].to_string(),
               "Error on line 1: expected next token to be IDENT, got INT instead");
}

#[test]
fn errors_carry_lines() {
    let (_, errors) = parse("let a = 1;\nlet b 2;\n\nlet = 3;");
    let lines: Vec<usize> = errors.iter().map(ParseError::line).collect();

    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn recovers_after_a_bad_statement() {
    let (program, errors) = parse("let x = ; let y = 5;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 5;");
}

#[test]
fn reports_several_errors_in_one_pass() {
    let (program, errors) = parse("let = 1; let y 2; let z = 3;");

    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "let z = 3;");
}

#[test]
fn unclosed_block() {
    let (_, errors) = parse("if (x) { 1");

    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                  found:    TokenKind::Eof,
                                                  line:     1, }]);
}

#[test]
fn invalid_integer_literal() {
    let (_, errors) = parse("99999999999999999999");

    assert_eq!(errors,
               vec![ParseError::InvalidIntegerLiteral { literal: "99999999999999999999".to_string(),
                                                        line:    1, }]);
    assert_eq!(errors[0].to_string(),
               "Error on line 1: could not parse 99999999999999999999 as integer");
}

#[test]
fn illegal_token_has_no_prefix_rule() {
    let (_, errors) = parse("@");

    assert_eq!(errors,
               vec![ParseError::NoPrefixParser { kind: TokenKind::Illegal,
                                                 line: 1, }]);
}

#[test]
fn bad_parameter() {
    let (_, errors) = parse("fn(1) { 1 }");

    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                             found:    TokenKind::Int,
                                             line:     1, });
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(render(&src), "1");
}

#[test]
fn deep_prefix_chain() {
    let src = format!("{}1", "-".repeat(200_000));
    let program = parse_ok(&src);

    let rendered = program.to_string();
    assert!(rendered.starts_with("(-(-(-"));
    assert!(rendered.ends_with("1))))"));
}

#[test]
fn long_infix_chain() {
    let src = format!("1{}", "+1".repeat(200_000));
    let program = parse_ok(&src);

    let rendered = program.to_string();
    assert!(rendered.trim_start_matches('(').starts_with("1 + 1) + 1)"));
    assert!(rendered.ends_with(" + 1)"));
}

#[test]
fn deep_trees_compare_equal() {
    let src = format!("{}x", "!".repeat(100_000));

    assert_eq!(parse_ok(&src), parse_ok(&src));
}

#[test]
fn failure_at_closing_brace_ends_the_block() {
    let (program, errors) = parse("let f = fn() { 1 + }; let y = 2;");

    assert_eq!(errors,
               vec![ParseError::NoPrefixParser { kind: TokenKind::RBrace,
                                                 line: 1, }]);
    assert_eq!(program.to_string(), "let f = fn() { };let y = 2;");
}

#[test]
fn failure_at_closing_brace_keeps_following_statements() {
    let (program, errors) = parse("if (true) { 1 + } let z = 3; z");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "if true { }let z = 3;z");
}

#[test]
fn block_recovers_after_a_bad_statement() {
    let (program, errors) = parse("fn() { let = 1; 2 }");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "fn() { 2 }");
}

#[test]
fn block_recovery_stops_before_closing_brace() {
    let (program, errors) = parse("fn() { let x 5 }");

    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                                  found:    TokenKind::Int,
                                                  line:     1, }]);
    assert_eq!(program.to_string(), "fn() { }");
}

#[test]
fn recovery_skips_nested_blocks() {
    let (program, errors) = parse("f(fn() { 1 } 2); let y = 3;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 3;");

    let (program, errors) = parse("let g = fn() { f(fn() { 1 } 2); 3 };");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let g = fn() { 3 };");
}

#[test]
fn unterminated_string_has_no_prefix_rule() {
    let (program, errors) = parse("\"abc");

    assert_eq!(errors,
               vec![ParseError::NoPrefixParser { kind: TokenKind::Illegal,
                                                 line: 1, }]);
    assert!(program.statements.is_empty());
}
