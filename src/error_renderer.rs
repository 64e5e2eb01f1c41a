//! Syntax error reports using ariadne
//!
//! The driver contract is a single `Syntax Error!` line per rejected program.
//! These helpers produce the longer, source-annotated form for people who
//! want to know what went wrong.

use crate::SyntaxError;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<line>";

/// Render an error report for `source` to stderr
pub fn render_error(source: &str, error: &SyntaxError) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error report to a specific writer
pub fn render_error_to(
    source: &str,
    error: &SyntaxError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error report to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &SyntaxError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &SyntaxError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = error
        .span
        .map(core::ops::Range::from)
        .unwrap_or(source.len()..source.len());
    let message = error.kind.to_string();

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(error.kind.code())
        .with_message(&message)
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(&message)
                .with_color(Color::Red),
        );

    if let Some(help) = error.kind.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
