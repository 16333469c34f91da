use crate::error::{EngineError, Result};
use crate::options::OutputFormat;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier searched for when no target is given.
pub const DEFAULT_TARGET: &str = "DEFAULT_TERMS";

/// One queued scan: a file and the literal substring to look for in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanJob {
    pub path: PathBuf,
    pub target: String,
}

impl ScanJob {
    pub fn new(path: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub jobs: Vec<ScanJob>,
    /// Abort the whole run on the first file that cannot be scanned.
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub format: OutputFormat,
    /// Write the report here instead of standard output
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Check that there is something to scan and that every target is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when the job list is empty or a job
    /// has an empty target or a target containing a line break.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(EngineError::Config("no files to scan".to_string()));
        }
        for job in &self.jobs {
            if job.target.is_empty() {
                return Err(EngineError::Config(format!(
                    "empty target for '{}'",
                    job.path.display()
                )));
            }
            // Matches are listed per line, so such a target could be counted
            // without any line ever being shown.
            if job.target.contains(['\n', '\r']) {
                return Err(EngineError::Config(format!(
                    "target for '{}' contains a line break",
                    job.path.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_job_list() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_target() {
        let config = ConfigBuilder::default()
            .jobs(vec![ScanJob::new("a.tsx", DEFAULT_TARGET), ScanJob::new("b.tsx", "")])
            .build()
            .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("b.tsx"));
    }

    #[test]
    fn test_validate_rejects_multiline_target() {
        for target in ["foo\nbar", "foo\r\nbar", "foo\r"] {
            let config = ConfigBuilder::default()
                .jobs(vec![ScanJob::new("jobs.tsx", target)])
                .build()
                .unwrap();

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("line break"), "{target:?}");
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::default()
            .jobs(vec![ScanJob::new("a.tsx", "x")])
            .build()
            .unwrap();

        assert!(!config.strict);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.output_path.is_none());
        assert!(config.validate().is_ok());
    }
}
