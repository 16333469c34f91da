// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "token_scan",
    version,
    about = "Report brace/parenthesis totals and occurrences of an identifier in source files",
    group(
        clap::ArgGroup::new("input_source")
            .args(["paths", "pair", "jobs_file"])
            .required(true)
            .multiple(true)
    )
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Files to scan for the default target
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// Literal substring to search for (default: DEFAULT_TERMS)
    #[arg(short, long, value_parser = parsers::parse_target, help_heading = "Input")]
    pub target: Option<String>,

    /// Scan PATH for TARGET (repeatable)
    #[arg(
        long,
        num_args = 2,
        value_names = ["PATH", "TARGET"],
        help_heading = "Input"
    )]
    pub pair: Vec<String>,

    /// YAML/JSON file listing files to scan
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub jobs_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Write the report to a file instead of standard output
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Stop at the first file that cannot be read
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Print debug logs to stderr
    #[arg(short, long, help_heading = "Behavior")]
    pub verbose: bool,
}
