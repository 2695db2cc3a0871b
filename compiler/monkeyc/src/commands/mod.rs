//! Command handlers for the Monkey CLI.
//!
//! Each submodule implements one command. Shared pieces (reading files,
//! option parsing, the error type) live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{repl, run_repl};
pub use run::{run_file, run_source};

use std::io::{self, IsTerminal, Write};

use monkey_eval::{Value, DEFAULT_MAX_CALL_DEPTH};
use monkey_parse::ParseError;

use crate::diagnostics::{render, Diagnostic};

/// Errors that stop a command before it can do its job.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid --max-depth value '{0}': expected a positive integer or 'none'")]
    InvalidMaxDepth(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path\nUsage: {0}")]
    MissingPath(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// How a command finished when it did not hit a `CommandError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The program did not parse or evaluated to an error.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Options shared by `run` and `repl`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub max_call_depth: Option<usize>,
    /// Colored diagnostics.
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            color: false,
        }
    }
}

impl RunOptions {
    /// Defaults, with color enabled when stderr is a terminal.
    pub fn for_terminal() -> Self {
        RunOptions {
            color: io::stderr().is_terminal(),
            ..RunOptions::default()
        }
    }
}

/// Split `args` (everything after the command name) into an optional file
/// path and run options.
pub fn parse_run_args(
    args: &[String],
    mut options: RunOptions,
) -> Result<(Option<String>, RunOptions), CommandError> {
    let mut path = None;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = parse_max_depth(value)?;
        } else if arg.starts_with('-') {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CommandError::UnknownOption(arg.clone()));
        }
    }
    Ok((path, options))
}

/// `none` for no limit, otherwise a positive integer.
pub fn parse_max_depth(value: &str) -> Result<Option<usize>, CommandError> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(Some(depth)),
        _ => Err(CommandError::InvalidMaxDepth(value.to_string())),
    }
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_string(),
        source,
    })
}

/// Render every parse error to `err`.
fn report_parse_errors(
    name: &str,
    source: &str,
    errors: &[ParseError],
    color: bool,
    err: &mut impl Write,
) -> io::Result<()> {
    for error in errors {
        let diagnostic = Diagnostic::from_parse_error(error);
        err.write_all(render(name, source, &diagnostic, color).as_bytes())?;
    }
    Ok(())
}

/// Print a program result: errors to `err`, `null` nowhere, anything else
/// to `out`.
fn report_value(
    name: &str,
    source: &str,
    value: &Value,
    color: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    match value {
        Value::Error(error) => {
            let diagnostic = Diagnostic::from_eval_error(error);
            err.write_all(render(name, source, &diagnostic, color).as_bytes())?;
            Ok(Outcome::Failed)
        }
        Value::Null => Ok(Outcome::Success),
        other => {
            writeln!(out, "{}", other.inspect())?;
            Ok(Outcome::Success)
        }
    }
}
