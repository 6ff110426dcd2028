//! Error rendering using ariadne
//!
//! This module renders [`Error`]s as reports with the code, message and a
//! snippet of the source with the offending span underlined.

use crate::Error;
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use sche::render_error;
///
/// let source = "(+ 1 x)";
/// if let Err(e) = sche::eval(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let span = error.span().0.clone();
    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(error.code())
        .with_message(error)
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    // Nothing to underline in empty input.
    if !span.is_empty() {
        report = report.with_label(
            Label::new((SOURCE_ID, span))
                .with_message(error.message())
                .with_color(colors.next()),
        );
    }

    if let Error::Tokenization(err) = error {
        report = report.with_note(format!("at {}", err.location));
    }
    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    // Render to the writer (need to reborrow to avoid moving)
    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
