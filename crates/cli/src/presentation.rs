// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use token_scan_engine::error::EngineError;
use token_scan_engine::options::OutputFormat;
use token_scan_engine::stats::{DelimiterCounts, Report, RunResult};

#[derive(Debug, Serialize)]
struct ErrorEntry<'a> {
    path: &'a Path,
    message: String,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    version: &'static str,
    reports: &'a [Report],
    errors: Vec<ErrorEntry<'a>>,
    stopped_early: bool,
}

/// Print a line per failed file to stderr.
pub fn print_errors(result: &RunResult) {
    for (path, err) in &result.errors {
        eprintln!("could not read {}: {}", path.display(), failure_reason(err));
    }
    if result.stopped_early {
        eprintln!("stopped at the first unreadable file (--strict)");
    }
}

/// The underlying cause without the path, which the caller prints itself.
#[must_use]
pub fn failure_reason(err: &EngineError) -> String {
    std::error::Error::source(err).map_or_else(|| err.to_string(), ToString::to_string)
}

/// Write the reports to the configured destination.
///
/// # Errors
///
/// Fails when the output file cannot be created or written, or when
/// serialization fails.
pub fn emit(result: &RunResult, config: &Config) -> Result<()> {
    match &config.output_path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_results(&mut out, result, config.format)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_results(&mut out, result, config.format)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// # Errors
///
/// Fails when writing to `out` or serialization fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in &result.reports {
                write_text(out, report)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &document(result))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &document(result))?,
        OutputFormat::Jsonl => write_jsonl(out, result)?,
    }
    Ok(())
}

fn document(result: &RunResult) -> Document<'_> {
    Document {
        version: crate::VERSION,
        reports: &result.reports,
        errors: result
            .errors
            .iter()
            .map(|(path, err)| ErrorEntry {
                path,
                message: err.to_string(),
            })
            .collect(),
        stopped_early: result.stopped_early,
    }
}

fn write_text<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "Checking {}...", report.path.display())?;
    writeln!(
        out,
        "Braces: {{: {}, }}: {}{}",
        report.braces.open,
        report.braces.close,
        imbalance_note(report.braces)
    )?;
    writeln!(
        out,
        "Parens: (: {}, ): {}{}",
        report.parens.open,
        report.parens.close,
        imbalance_note(report.parens)
    )?;
    writeln!(out, "{} occurrences: {}", report.target, report.occurrences)?;
    for m in &report.matches {
        writeln!(out, "{}: {}", m.line_number, m.text)?;
    }
    Ok(())
}

fn imbalance_note(counts: DelimiterCounts) -> String {
    if counts.is_balanced() {
        String::new()
    } else {
        format!(" (unbalanced: {:+})", counts.difference())
    }
}

fn write_jsonl<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    for report in &result.reports {
        let mut v = serde_json::to_value(report)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "report".into());
        }
        writeln!(out, "{}", serde_json::to_string(&v)?)?;
    }

    for (path, err) in &result.errors {
        let obj = serde_json::json!({
            "type": "error",
            "path": path.display().to_string(),
            "message": err.to_string(),
        });
        writeln!(out, "{obj}")?;
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": result.reports.len(),
        "failed": result.errors.len(),
        "stopped_early": result.stopped_early,
        "occurrences": result.total_occurrences(),
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}
