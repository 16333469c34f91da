use crate::error::EngineError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw totals of an opening/closing character pair.
///
/// These are flat tallies: nesting, strings and comments are not considered,
/// so a balanced total says nothing about structural correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterCounts {
    pub open: usize,
    pub close: usize,
}

impl DelimiterCounts {
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.open == self.close
    }

    /// `open - close`; positive when openers outnumber closers.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn difference(&self) -> isize {
        self.open as isize - self.close as isize
    }
}

/// A line containing the target, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub path: PathBuf,
    pub target: String,
    /// Bytes of text scanned
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<DateTime<Local>>,
    pub braces: DelimiterCounts,
    pub parens: DelimiterCounts,
    pub occurrences: usize,
    pub matches: Vec<LineMatch>,
}

impl Report {
    pub fn new(path: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
            size: 0,
            mtime: None,
            braces: DelimiterCounts::default(),
            parens: DelimiterCounts::default(),
            occurrences: 0,
            matches: Vec::new(),
        }
    }
}

/// Outcome of scanning a queue of files.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<Report>,
    pub errors: Vec<(PathBuf, EngineError)>,
    /// Strict mode hit a failure and the rest of the queue was skipped
    pub stopped_early: bool,
}

impl RunResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn total_occurrences(&self) -> usize {
        self.reports.iter().map(|r| r.occurrences).sum()
    }
}
