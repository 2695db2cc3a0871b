//! The `run` command: parse and evaluate a Monkey source file.

use std::io::{self, Write};

use monkey_eval::Interpreter;
use monkey_parse::parse;
use tracing::debug;

use super::{read_file, report_parse_errors, report_value, CommandError, Outcome, RunOptions};

/// Run a source file, printing its result to stdout and errors to stderr.
pub fn run_file(path: &str, options: &RunOptions) -> Result<Outcome, CommandError> {
    let source = read_file(path)?;
    let outcome = run_source(
        path,
        &source,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(outcome)
}

/// Parse and evaluate `source`.
///
/// Nothing is evaluated unless the whole source parses. A non-`null`
/// result is written to `out`; diagnostics go to `err`.
pub fn run_source(
    name: &str,
    source: &str,
    options: &RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    let program = match parse(source) {
        Ok(program) => program,
        Err(errors) => {
            debug!(count = errors.len(), "parse failed");
            report_parse_errors(name, source, &errors, options.color, err)?;
            return Ok(Outcome::Failed);
        }
    };

    let mut interpreter = Interpreter::builder()
        .max_call_depth(options.max_call_depth)
        .build();
    let result = interpreter.eval_program(&program);
    report_value(name, source, &result, options.color, out, err)
}
