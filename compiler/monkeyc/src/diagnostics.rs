//! Source-labelled error reports.
//!
//! Lex, parse and runtime errors are all turned into a [`Diagnostic`] and
//! rendered with ariadne against the source they came from.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use monkey_eval::EvalError;
use monkey_ir::Span;
use monkey_parse::ParseError;

/// A renderable error: message, primary span, and a short label for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
    pub label: &'static str,
}

impl Diagnostic {
    pub fn from_parse_error(error: &ParseError) -> Self {
        Diagnostic {
            message: error.to_string(),
            span: Some(error.span),
            label: error.label(),
        }
    }

    pub fn from_eval_error(error: &EvalError) -> Self {
        Diagnostic {
            message: error.message.clone(),
            span: error.span,
            label: "evaluated here",
        }
    }
}

/// Render `diagnostic` for `source` (named `name` in the report header).
///
/// Spans are clamped to the source so a stale span can never make the
/// renderer index out of bounds.
pub fn render(name: &str, source: &str, diagnostic: &Diagnostic, color: bool) -> String {
    let Some(span) = diagnostic.span else {
        return format!("error: {}\n", diagnostic.message);
    };
    let range = clamp(span, source.len());

    let report = Report::build(ReportKind::Error, name, range.start)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message)
        .with_label(
            Label::new((name, range))
                .with_message(diagnostic.label)
                .with_color(Color::Red),
        )
        .finish();

    let mut buffer = Vec::new();
    if report
        .write((name, Source::from(source)), &mut buffer)
        .is_err()
    {
        return format!("error: {}\n", diagnostic.message);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn clamp(span: Span, len: usize) -> Range<usize> {
    let range = span.to_range();
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}
