//! Output formatting and display logic for urlformat

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

use crate::batch::{Report, Summary};
use crate::classifier::{MessageTable, Outcome};
use crate::core::constants::output_formats;
use crate::ui::color::{Colors, colorize, outcome_color};

#[derive(Serialize)]
struct JsonResult<'a> {
    value: &'a Value,
    source: &'a str,
    line: Option<u64>,
    valid: bool,
    code: Outcome,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    summary: &'a Summary,
}

/// Write results in the requested format
pub fn write_results<W: Write>(
    out: &mut W,
    reports: &[Report],
    summary: &Summary,
    messages: &MessageTable,
    output_format: &str,
) -> io::Result<()> {
    match output_format {
        output_formats::MINIMAL => write_minimal_output(out, reports),
        output_formats::JSON => write_json_output(out, reports, summary, messages),
        _ => write_text_output(out, reports, summary, messages),
    }
}

/// Display results on stdout
pub fn display_results(
    reports: &[Report],
    summary: &Summary,
    messages: &MessageTable,
    output_format: &str,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, reports, summary, messages, output_format)?;
    out.flush()
}

/// Rejected candidates only, `code<TAB>value`, no colors
fn write_minimal_output<W: Write>(out: &mut W, reports: &[Report]) -> io::Result<()> {
    for report in reports.iter().filter(|r| !r.outcome.is_valid()) {
        writeln!(
            out,
            "{}\t{}",
            report.outcome.code(),
            report.candidate.display_value()
        )?;
    }
    Ok(())
}

fn write_json_output<W: Write>(
    out: &mut W,
    reports: &[Report],
    summary: &Summary,
    messages: &MessageTable,
) -> io::Result<()> {
    let results = reports
        .iter()
        .map(|report| JsonResult {
            value: &report.candidate.value,
            source: &report.candidate.source,
            line: report.candidate.line,
            valid: report.outcome.is_valid(),
            code: report.outcome,
            message: report.message(messages),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &JsonOutput { results, summary })?;
    writeln!(out)
}

fn write_text_output<W: Write>(
    out: &mut W,
    reports: &[Report],
    summary: &Summary,
    messages: &MessageTable,
) -> io::Result<()> {
    for report in reports {
        let mark = if report.outcome.is_valid() { "✓" } else { "✗" };
        let color = outcome_color(report.outcome);
        writeln!(
            out,
            "{} {} {} {} {}",
            colorize(mark, color),
            report.candidate.display_value(),
            colorize(&format!("[{}]", report.outcome.code()), color),
            report.message(messages),
            colorize(&format!("({})", report.candidate), Colors::DIM)
        )?;
    }

    if !reports.is_empty() {
        writeln!(out)?;
    }
    write_summary(out, summary)
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let headline = format!(
        "{}/{} valid, {} rejected",
        summary.valid, summary.total, summary.rejected
    );
    let color = if summary.all_valid() {
        Colors::BRIGHT_GREEN
    } else {
        Colors::BRIGHT_RED
    };
    writeln!(out, "{}", colorize(&headline, color))?;

    for (outcome, count) in summary.by_outcome.iter().filter(|(o, _)| !o.is_valid()) {
        writeln!(out, "  {}: {}", colorize(outcome.code(), Colors::BRIGHT_CYAN), count)?;
    }
    Ok(())
}
