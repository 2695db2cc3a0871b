//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::{self, Write};

use monkey_lexer::lex;
use monkey_parse::{parse, ParseError};

use super::{read_file, report_parse_errors, CommandError, Outcome, RunOptions};

/// Parse a file and print each statement in canonical form.
pub fn parse_file(path: &str, options: &RunOptions) -> Result<Outcome, CommandError> {
    let source = read_file(path)?;
    let outcome = parse_source(
        path,
        &source,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(outcome)
}

pub fn parse_source(
    name: &str,
    source: &str,
    options: &RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    match parse(source) {
        Ok(program) => {
            writeln!(out, "{} statement(s)", program.statements.len())?;
            for stmt in &program.statements {
                writeln!(out, "  {stmt}")?;
            }
            Ok(Outcome::Success)
        }
        Err(errors) => {
            report_parse_errors(name, source, &errors, options.color, err)?;
            Ok(Outcome::Failed)
        }
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str, options: &RunOptions) -> Result<Outcome, CommandError> {
    let source = read_file(path)?;
    let outcome = lex_source(
        path,
        &source,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(outcome)
}

pub fn lex_source(
    name: &str,
    source: &str,
    options: &RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    match lex(source) {
        Ok(tokens) => {
            writeln!(out, "{} token(s)", tokens.len())?;
            for token in &tokens {
                writeln!(out, "  {} @ {:?}", token.kind, token.span)?;
            }
            Ok(Outcome::Success)
        }
        Err(errors) => {
            let errors: Vec<ParseError> = errors.into_iter().map(ParseError::from).collect();
            report_parse_errors(name, source, &errors, options.color, err)?;
            Ok(Outcome::Failed)
        }
    }
}
