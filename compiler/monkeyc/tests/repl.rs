//! End-to-end tests for the REPL, fed from an in-memory reader.

use monkeyc::commands::{repl, RunOptions};
use pretty_assertions::assert_eq;

struct Session {
    stdout: String,
    stderr: String,
}

fn session(input: &str) -> Session {
    let mut out = Vec::new();
    let mut err = Vec::new();
    if let Err(e) = repl(input.as_bytes(), &mut out, &mut err, &RunOptions::default()) {
        panic!("writing to a Vec failed: {e}");
    }
    Session {
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// The result lines, with the banner and prompts stripped.
fn results(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .flat_map(|line| line.split(">> "))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn bindings_persist_between_lines() {
    let s = session("let x = 5;\nlet y = x * 2;\nx + y\n");
    assert_eq!(results(&s.stdout), vec!["15"]);
    assert_eq!(s.stderr, "");
}

#[test]
fn prints_banner_and_prompt() {
    let s = session("");
    assert!(s.stdout.starts_with("Monkey "), "{}", s.stdout);
    assert!(s.stdout.contains(">> "), "{}", s.stdout);
}

#[test]
fn errors_do_not_end_the_session() {
    let s = session("1 + true\nlet = 3;\n2 * 21\n");
    assert_eq!(results(&s.stdout), vec!["42"]);
    assert!(s.stderr.contains("type mismatch"), "{}", s.stderr);
    assert!(s.stderr.contains("<repl>"), "{}", s.stderr);
    assert!(s.stderr.contains("let statement"), "{}", s.stderr);
}

#[test]
fn quit_stops_reading() {
    let s = session("1\n:quit\n2\n");
    assert_eq!(results(&s.stdout), vec!["1"]);
}

#[test]
fn blank_lines_are_skipped() {
    let s = session("\n   \n7\n");
    assert_eq!(results(&s.stdout), vec!["7"]);
}

#[test]
fn functions_defined_earlier_can_be_called() {
    let s = session("let sq = fn(n) { n * n };\nsq(9)\n");
    assert_eq!(results(&s.stdout), vec!["81"]);
}

#[test]
fn bindings_before_an_error_are_kept() {
    let s = session("let a = 4; a + true;\na\n");
    assert_eq!(results(&s.stdout), vec!["4"]);
    assert!(s.stderr.contains("type mismatch"), "{}", s.stderr);
}

#[test]
fn errors_inside_earlier_functions_point_at_their_definition() {
    let s = session("let f = fn() { yy };\n  f()\n");
    assert!(s.stderr.contains("identifier not found: yy"), "{}", s.stderr);
    assert!(s.stderr.contains("let f = fn() { yy };"), "{}", s.stderr);
    assert!(s.stderr.contains("<repl>:1:"), "{}", s.stderr);
}

#[test]
fn errors_on_later_lines_report_their_line() {
    let s = session("let a = 1;\na + true\n");
    assert!(s.stderr.contains("<repl>:2:"), "{}", s.stderr);
    assert!(s.stderr.contains("a + true"), "{}", s.stderr);
}
