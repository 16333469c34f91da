use clap::Parser;
use std::process::ExitCode;
use token_scan_cli::args::Args;
use token_scan_cli::config::Config;
use token_scan_cli::{logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_cli_logger(args.behavior.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(jobs = config.jobs.len(), strict = config.strict, "configuration loaded");

    match token_scan_engine::run(&config) {
        Ok(result) => {
            presentation::print_errors(&result);

            if let Err(e) = presentation::emit(&result, &config) {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }

            if result.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
