// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod options;
pub mod scan;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::RunResult;

pub use crate::scan::{scan_file, scan_text};

/// Scan every queued job in order.
///
/// Jobs run one after another on the calling thread. A file that cannot be
/// read or decoded is recorded in `RunResult::errors` and the remaining
/// jobs still run. In strict mode the queue stops at that file instead;
/// reports gathered before it are kept and `RunResult::stopped_early` is set.
///
/// # Errors
///
/// Returns an error when the configuration is invalid.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let mut result = RunResult::default();
    for job in &config.jobs {
        log::debug!("scanning {} for '{}'", job.path.display(), job.target);

        match scan::scan_file(&job.path, &job.target) {
            Ok(report) => result.reports.push(report),
            Err(e) => {
                log::warn!("failed to scan {}: {e}", job.path.display());
                result.errors.push((job.path.clone(), e));
                if config.strict {
                    result.stopped_early = true;
                    break;
                }
            }
        }
    }

    Ok(result)
}
