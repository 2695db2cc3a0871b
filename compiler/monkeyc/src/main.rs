//! Monkey interpreter CLI.

use monkeyc::commands::{
    lex_file, parse_file, parse_run_args, run_file, run_repl, CommandError, Outcome, RunOptions,
};

const RUN_USAGE: &str = "monkey run <file> [--max-depth=N|none]";

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let options = RunOptions::for_terminal();

    let Some(command) = args.get(1) else {
        exit_with(run_repl(&options).map(|()| Outcome::Success));
        return;
    };

    let rest = &args[2..];
    let result = match command.as_str() {
        "run" => match parse_run_args(rest, options) {
            Ok((Some(path), options)) => run_file(&path, &options),
            Ok((None, _)) => Err(CommandError::MissingPath(RUN_USAGE)),
            Err(e) => Err(e),
        },
        "repl" => parse_run_args(rest, options)
            .and_then(|(_, options)| run_repl(&options).map(|()| Outcome::Success)),
        "parse" => match rest.first() {
            Some(path) => parse_file(path, &options),
            None => Err(CommandError::MissingPath("monkey parse <file>")),
        },
        "lex" => match rest.first() {
            Some(path) => lex_file(path, &options),
            None => Err(CommandError::MissingPath("monkey lex <file>")),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Outcome::Success)
        }
        "version" | "--version" | "-V" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Success)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };
    exit_with(result);
}

fn exit_with(result: Result<Outcome, CommandError>) {
    match result {
        Ok(Outcome::Success) => {}
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Evaluate a Monkey program and print its result");
    println!("  repl             Start an interactive session (default)");
    println!("  parse <file>     Parse and print statements in canonical form");
    println!("  lex <file>       Tokenize and display tokens");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=N    Limit nested function calls (default: 10000)");
    println!("  --max-depth=none Disable the call depth limit");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Enable tracing output (e.g. RUST_LOG=monkey_eval=debug)");
    println!("  MONKEY_LOG_TREE=1 Print tracing spans as an indented tree");
    println!();
    println!("Examples:");
    println!("  monkey run fib.mk");
    println!("  monkey run deep.mk --max-depth=none");
    println!("  monkey                          # REPL");
}
