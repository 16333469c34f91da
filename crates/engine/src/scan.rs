use crate::error::{EngineError, Result};
use crate::stats::{DelimiterCounts, LineMatch, Report};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Scan a single file for delimiter totals and occurrences of `target`.
///
/// The file is read completely and decoded as UTF-8 before any counting
/// starts; the handle is closed before this function returns, on success
/// or failure.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read
/// and [`EngineError::Decode`] when its content is not valid UTF-8.
pub fn scan_file(path: &Path, target: &str) -> Result<Report> {
    let (bytes, mtime) = read_file(path)?;

    let content = std::str::from_utf8(&bytes).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut report = scan_text(path, content, target);
    report.mtime = mtime;
    Ok(report)
}

fn read_file(path: &Path) -> Result<(Vec<u8>, Option<DateTime<Local>>)> {
    let read_err = |e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let mtime = file
        .metadata()
        .ok()
        .and_then(|meta| meta.modified().ok())
        .map(DateTime::<Local>::from);

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(read_err)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok((bytes, mtime))
}

/// Build a report for text that is already in memory.
///
/// `target` is matched literally, left to right and without overlap, so it
/// also hits inside comments, strings and longer identifiers. An empty
/// target matches nothing.
pub fn scan_text(path: &Path, content: &str, target: &str) -> Report {
    let mut report = Report::new(path, target);
    report.size = content.len() as u64;
    report.braces = count_pair(content, b'{', b'}');
    report.parens = count_pair(content, b'(', b')');

    if target.is_empty() {
        return report;
    }

    report.occurrences = content.matches(target).count();
    report.matches = content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(target))
        .map(|(i, line)| LineMatch {
            line_number: i + 1,
            text: line.to_string(),
        })
        .collect();

    report
}

// ASCII delimiters never occur inside a multi-byte UTF-8 sequence, so a byte
// tally equals the character tally.
fn count_pair(content: &str, open: u8, close: u8) -> DelimiterCounts {
    let bytes = content.as_bytes();
    DelimiterCounts {
        open: bytecount::count(bytes, open),
        close: bytecount::count(bytes, close),
    }
}
