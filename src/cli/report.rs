//! Report formatting and printing utilities.
//!
//! Diagnostics and failures go to stderr in cargo style. Success summaries
//! go to stdout, except when the generated source itself is printed there.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, Destination};
use crate::issues::{Diagnostic, DiagnosticKind, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for diagnostic in &result.diagnostics {
        if diagnostic.kind == DiagnosticKind::ParseError && !verbose {
            continue;
        }
        print_diagnostic(diagnostic, err);
    }
    print_parse_warning_to(result.parse_error_count(), verbose, err);

    if let Some(failure) = &result.failure {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), failure);
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            "Nothing was generated".red()
        );
        return;
    }

    match &result.summary {
        Some(CommandSummary::Generate(summary)) => match &summary.destination {
            Destination::File(path) => {
                let _ = writeln!(
                    out,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Generated {} for state {} in {}",
                        plural(summary.exports.len(), "export"),
                        summary.state_name,
                        path.display()
                    )
                    .green()
                );
                print_exports(&summary.exports, verbose, out);
            }
            Destination::Stdout(source) => {
                let _ = write!(out, "{}", source);
                let _ = writeln!(
                    err,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Generated {} for state {}",
                        plural(summary.exports.len(), "export"),
                        summary.state_name
                    )
                    .green()
                );
            }
        },
        Some(CommandSummary::Check(summary)) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Checked {} - state {}, {}",
                    plural(result.files_scanned, "Go file"),
                    summary.state_name,
                    plural(summary.exports.len(), "export")
                )
                .green()
            );
            print_exports(&summary.exports, verbose, out);
        }
        Some(CommandSummary::Init(summary)) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
        None => {}
    }
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            plural(count, "file"),
            "-v".cyan()
        );
    }
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity = match diagnostic.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        diagnostic.message,
        diagnostic.kind.to_string().dimmed().cyan()
    );
    if let Some(file) = &diagnostic.file {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file);
    }
}

fn print_exports<W: Write>(exports: &[String], verbose: bool, writer: &mut W) {
    if !verbose {
        return;
    }
    for export in exports {
        let _ = writeln!(writer, "  {} {}", "-".blue(), export);
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
