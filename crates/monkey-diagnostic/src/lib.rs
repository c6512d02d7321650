//! Diagnostic and error reporting for Monkey.
//! Monkey 的诊断和错误报告。
//!
//! This crate renders diagnostics using ariadne.
//! 本 crate 使用 ariadne 库渲染诊断信息。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use std::io;
use std::ops::Range;

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

type AriadneSpan<'a> = (&'a str, Range<usize>);

fn build<'a>(
    filename: &'a str,
    diagnostic: &'a Diagnostic,
    color: bool,
) -> Report<'a, AriadneSpan<'a>> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, diagnostic.span.start.0 as usize)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic to a string, without colors.
/// 将诊断信息渲染为字符串（不带颜色）。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut buf = Vec::new();
    build(filename, diagnostic, false).write((filename, Source::from(source)), &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
