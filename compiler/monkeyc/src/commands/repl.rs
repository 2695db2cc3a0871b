//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use monkey_eval::Interpreter;
use monkey_parse::parse_at;

use super::{report_parse_errors, report_value, CommandError, RunOptions};

const PROMPT: &str = ">> ";
const REPL_NAME: &str = "<repl>";

/// Run the REPL on stdin/stdout/stderr.
pub fn run_repl(options: &RunOptions) -> Result<(), CommandError> {
    let stdin = io::stdin();
    repl(
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        options,
    )?;
    Ok(())
}

/// Evaluate one line at a time in a single global environment.
///
/// Ends at end of input or on `:quit`. Errors are reported and the loop
/// continues; bindings made before an error are kept. Every entered line is
/// kept in one source buffer, so an error raised inside a function from an
/// earlier line is labelled where that function was written.
pub fn repl(
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    options: &RunOptions,
) -> io::Result<()> {
    let mut interpreter = Interpreter::builder()
        .max_call_depth(options.max_call_depth)
        .build();
    writeln!(
        out,
        "Monkey {} (type :quit to exit)",
        env!("CARGO_PKG_VERSION")
    )?;

    let mut history = String::new();
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed == ":quit" {
            return Ok(());
        }
        if trimmed.is_empty() {
            continue;
        }

        let offset = u32::try_from(history.len()).unwrap_or(u32::MAX);
        history.push_str(&line);
        match parse_at(&line, offset) {
            Ok(program) => {
                let result = interpreter.eval_program(&program);
                report_value(REPL_NAME, &history, &result, options.color, out, err)?;
            }
            Err(errors) => {
                report_parse_errors(REPL_NAME, &history, &errors, options.color, err)?;
            }
        }
    }
}
