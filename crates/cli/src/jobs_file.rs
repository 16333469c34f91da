// crates/cli/src/jobs_file.rs
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use token_scan_engine::config::ScanJob;

/// A queue of files to scan, read from YAML or JSON.
///
/// ```yaml
/// target: DEFAULT_TERMS
/// files:
///   - src/context/campus-context.tsx
///   - path: src/app/onboarding/page.tsx
///     target: OTHER_TERMS
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobsFile {
    #[serde(default)]
    pub target: Option<String>,
    pub files: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobEntry {
    Path(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        target: Option<String>,
    },
}

impl JobsFile {
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a valid job list.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::JobsFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text).map_err(|e| AppError::JobsFileFormat {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// # Errors
    ///
    /// Fails when `text` is not a valid job list.
    pub fn parse(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Resolve entries into jobs.
    ///
    /// Relative paths are taken relative to `base_dir`. An entry's own target
    /// wins over the file-level target, which wins over `fallback_target`.
    #[must_use]
    pub fn into_jobs(self, base_dir: &Path, fallback_target: &str) -> Vec<ScanJob> {
        let default_target = self.target.unwrap_or_else(|| fallback_target.to_string());

        self.files
            .into_iter()
            .map(|entry| {
                let (path, target) = match entry {
                    JobEntry::Path(path) => (path, None),
                    JobEntry::Detailed { path, target } => (path, target),
                };
                let path = if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                };
                ScanJob::new(path, target.unwrap_or_else(|| default_target.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_entries() {
        let file = JobsFile::parse(
            "target: FOO\nfiles:\n  - a.tsx\n  - path: b.tsx\n    target: BAR\n",
        )
        .unwrap();

        let jobs = file.into_jobs(Path::new("/work"), "DEFAULT_TERMS");
        assert_eq!(
            jobs,
            vec![
                ScanJob::new("/work/a.tsx", "FOO"),
                ScanJob::new("/work/b.tsx", "BAR"),
            ]
        );
    }

    #[test]
    fn test_parse_json_uses_fallback_target() {
        let file = JobsFile::parse(r#"{"files": [{"path": "/abs/c.tsx"}]}"#).unwrap();
        let jobs = file.into_jobs(Path::new("/work"), "DEFAULT_TERMS");
        assert_eq!(jobs, vec![ScanJob::new("/abs/c.tsx", "DEFAULT_TERMS")]);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(JobsFile::parse("files: []\nstrict: true\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JobsFile::load(&dir.path().join("jobs.yaml")).unwrap_err();
        assert!(matches!(err, AppError::JobsFileRead { .. }));
    }
}
