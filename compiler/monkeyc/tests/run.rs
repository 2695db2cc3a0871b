//! End-to-end tests for `monkey run`, driven through `run_source`.

use monkeyc::commands::{run_source, Outcome, RunOptions};
use pretty_assertions::assert_eq;

struct Output {
    outcome: Outcome,
    stdout: String,
    stderr: String,
}

fn run_with(source: &str, options: &RunOptions) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = match run_source("test.mk", source, options, &mut out, &mut err) {
        Ok(outcome) => outcome,
        Err(e) => panic!("writing to a Vec failed: {e}"),
    };
    Output {
        outcome,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

fn run(source: &str) -> Output {
    run_with(source, &RunOptions::default())
}

#[track_caller]
fn assert_prints(source: &str, expected: &str) {
    let output = run(source);
    assert_eq!(output.outcome, Outcome::Success, "stderr: {}", output.stderr);
    assert_eq!(output.stdout, format!("{expected}\n"));
    assert_eq!(output.stderr, "");
}

#[track_caller]
fn assert_fails_with(source: &str, message: &str) {
    let output = run(source);
    assert_eq!(output.outcome, Outcome::Failed);
    assert_eq!(output.stdout, "");
    assert!(
        output.stderr.contains(message),
        "expected `{message}` in:\n{}",
        output.stderr
    );
}

#[test]
fn prints_integer_result() {
    assert_prints("5 + 5 * 2", "15");
}

#[test]
fn prints_boolean_result() {
    assert_prints("(1 < 2) == true", "true");
}

#[test]
fn null_result_prints_nothing() {
    let output = run("if (false) { 10 }");
    assert_eq!(output.outcome, Outcome::Success);
    assert_eq!(output.stdout, "");
}

#[test]
fn empty_program_prints_nothing() {
    let output = run("");
    assert_eq!(output.outcome, Outcome::Success);
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "");
}

#[test]
fn let_statement_result_is_null() {
    let output = run("let x = 5;");
    assert_eq!(output.outcome, Outcome::Success);
    assert_eq!(output.stdout, "");
}

#[test]
fn top_level_return_is_unwrapped() {
    assert_prints("9; return 2 * 5; 9;", "10");
}

#[test]
fn nested_block_return_stops_outer_block() {
    assert_prints("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn closures_capture_their_environment() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_prints(source, "5");
}

#[test]
fn recursive_fibonacci() {
    let source = "
        let fib = fn(n) {
            if (n < 2) { return n; }
            fib(n - 1) + fib(n - 2)
        };
        fib(15);
    ";
    assert_prints(source, "610");
}

#[test]
fn higher_order_functions() {
    let source = "
        let twice = fn(f, x) { f(f(x)) };
        twice(fn(n) { n * 3 }, 2);
    ";
    assert_prints(source, "18");
}

#[test]
fn function_value_prints_its_source() {
    assert_prints("fn(x) { x + 2; };", "fn(x) {\n(x + 2)\n}");
}

#[test]
fn type_mismatch_reports_and_fails() {
    assert_fails_with("5 + true;", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn unknown_operator_reports_and_fails() {
    assert_fails_with("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_fails_with("-true", "unknown operator: -BOOLEAN");
}

#[test]
fn first_error_stops_evaluation() {
    assert_fails_with("let a = 5; a + true; 10", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn unbound_identifier_reports_and_fails() {
    assert_fails_with("foobar", "identifier not found: foobar");
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert_fails_with("10 / (5 - 5)", "division by zero");
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_fails_with("9223372036854775807 + 1", "integer overflow");
}

#[test]
fn calling_a_non_function_fails() {
    assert_fails_with("let x = 5; x(1);", "not a function: INTEGER");
}

#[test]
fn arity_mismatch_fails() {
    assert_fails_with(
        "let f = fn(a, b) { a }; f(1);",
        "wrong number of arguments: want=2, got=1",
    );
}

#[test]
fn runtime_errors_point_at_source() {
    let output = run("let x = 1;\nx + true;");
    assert_eq!(output.outcome, Outcome::Failed);
    assert!(output.stderr.contains("test.mk"), "{}", output.stderr);
    assert!(output.stderr.contains("x + true"), "{}", output.stderr);
}

#[test]
fn parse_errors_prevent_evaluation() {
    let output = run("let x = 5; let = 10;");
    assert_eq!(output.outcome, Outcome::Failed);
    assert_eq!(output.stdout, "");
    assert!(
        output.stderr.contains("while parsing a let statement"),
        "{}",
        output.stderr
    );
}

#[test]
fn lex_errors_are_reported() {
    assert_fails_with("let x = 5 @ 3;", "unexpected character `@`");
}

#[test]
fn call_depth_limit_is_enforced() {
    let options = RunOptions {
        max_call_depth: Some(50),
        ..RunOptions::default()
    };
    let output = run_with("let f = fn(n) { f(n + 1) }; f(0);", &options);
    assert_eq!(output.outcome, Outcome::Failed);
    assert!(
        output.stderr.contains("maximum call depth of 50 exceeded"),
        "{}",
        output.stderr
    );
}

#[test]
fn unlimited_depth_allows_deep_recursion() {
    let options = RunOptions {
        max_call_depth: None,
        ..RunOptions::default()
    };
    let source = "
        let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(20000);
    ";
    let output = run_with(source, &options);
    assert_eq!(output.outcome, Outcome::Success, "{}", output.stderr);
    assert_eq!(output.stdout, "20000\n");
}
