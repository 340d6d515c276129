use std::fs;

use pretty_assertions::assert_eq;
use waixg::{Session, error::Error, get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

/// Renders the outcome of a script the way the command line reports it.
fn render(source: &str) -> String {
    match get_result(source) {
        Ok(value) => value.to_string(),
        Err(Error::Runtime(e)) => format!("ERROR: {e}"),
        Err(e @ Error::Parse(_)) => e.to_string(),
    }
}

#[test]
fn scripts_produce_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| e.path().extension().is_some_and(|ext| ext == "wx"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Missing expected output {expected_path:?}: {e}")
                                                         });

        count += 1;
        assert_eq!(render(&source).trim_end(), expected.trim_end(), "script {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "source: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("let x = 1 + 2\nx", Value::Integer(3));
    assert_value("let x = 7 * 9\nx", Value::Integer(63));
    assert_value("let x = 8 - 5\nx", Value::Integer(3));
    assert_value("let x = 10 / 2\nx", Value::Integer(5));
}

#[test]
fn semicolons_and_newlines_are_interchangeable() {
    assert_value("let a = 1; let b = 2; a + b", Value::Integer(3));
    assert_value("let a = 1\nlet b = 2\na + b", Value::Integer(3));
    assert_value("let a = 1;;\n;let b = 2;\n\na + b;;", Value::Integer(3));
}

#[test]
fn keywords_ignore_case() {
    assert_value("LET f = FN(x) { RETURN x * 2 }; f(4)", Value::Integer(8));
    assert_value("if (TRUE) { 1 } Else { 2 }", Value::Integer(1));
}

#[test]
fn programs_run() {
    assert_success("");
    assert_success("let unused = 1");
    assert_success("puts(\"hello\", 1, true)");
    assert_success("let f = fn() { }; f()");
    assert_success("if (false) { 1 }");
}

#[test]
fn syntax_errors_fail() {
    assert_failure("let = 5");
    assert_failure("let x 5");
    assert_failure("fn(x { x }");
    assert_failure("if (true { 1 }");
    assert_failure("if (true) { 1");
    assert_failure("1 +");
    assert_failure("@");
}

#[test]
fn runtime_errors_fail() {
    assert_failure("undefined");
    assert_failure("1 + true");
    assert_failure("1 / 0");
    assert_failure("let f = fn(a) { a }; f()");
    assert_failure("let f = fn() { f() }; f()");
}

#[test]
fn parse_errors_are_all_reported() {
    let Err(Error::Parse(errors)) = get_result("let = 1;\nlet y 2;\nlet z = ;") else {
        panic!("expected parse errors");
    };
    let lines: Vec<usize> = errors.iter().map(|e| e.line()).collect();

    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn scripts_with_parse_errors_are_not_evaluated() {
    let mut session = Session::new();

    assert!(session.run("let x = 1; let = 2;").is_err());
    assert!(session.run("x").is_err());
}

#[test]
fn sessions_keep_bindings() {
    let mut session = Session::new();

    session.run("let base = 10;").unwrap();
    session.run("let add = fn(x) { base + x };").unwrap();

    assert_eq!(session.run("add(5)").unwrap(), Value::Integer(15));
    assert_eq!(session.environment().get("base"), Some(Value::Integer(10)));
}

#[test]
fn sessions_recover_after_errors() {
    let mut session = Session::new();

    session.run("let a = 2;").unwrap();
    assert_eq!(session.run("a + nope").unwrap_err().to_string(),
               "identifier not found: nope");
    assert_eq!(session.run("a * 21").unwrap(), Value::Integer(42));
}

#[test]
fn session_builtins_can_be_extended() {
    fn seven(_: &[Value]) -> Value {
        Value::Integer(7)
    }

    let mut session = Session::new();
    session.evaluator_mut().register_builtin("seven", seven);

    assert_eq!(session.run("seven() * 6").unwrap(), Value::Integer(42));
}
