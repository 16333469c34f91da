// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::jobs_file::JobsFile;
use crate::{options, parsers};
pub use token_scan_engine::config::{Config, ConfigBuilder, DEFAULT_TARGET, ScanJob};
use token_scan_engine::options as engine_options;
use std::path::Path;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let jobs = collect_jobs(&args)?;
        let format: engine_options::OutputFormat = args.output.format.into();

        let config = ConfigBuilder::default()
            .jobs(jobs)
            .strict(args.behavior.strict)
            .format(format)
            .output_path(args.output.output)
            .build()
            .map_err(|e| AppError::Args(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}

/// Queue order: jobs file entries, then positional paths, then `--pair`s.
fn collect_jobs(args: &Args) -> Result<Vec<ScanJob>> {
    let target = args.input.target.as_deref().unwrap_or(DEFAULT_TARGET);
    let mut jobs = Vec::new();

    if let Some(path) = &args.input.jobs_file {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        jobs.extend(JobsFile::load(path)?.into_jobs(base_dir, target));
    }

    jobs.extend(args.paths.iter().map(|p| ScanJob::new(p, target)));
    jobs.extend(parsers::parse_pairs(&args.input.pair).map_err(AppError::Args)?);

    Ok(jobs)
}

impl From<options::OutputFormat> for engine_options::OutputFormat {
    fn from(f: options::OutputFormat) -> Self {
        match f {
            options::OutputFormat::Text => Self::Text,
            options::OutputFormat::Json => Self::Json,
            options::OutputFormat::Jsonl => Self::Jsonl,
            options::OutputFormat::Yaml => Self::Yaml,
        }
    }
}
