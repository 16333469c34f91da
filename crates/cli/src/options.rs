use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text report per file
    #[default]
    Text,
    /// One JSON document with every report
    Json,
    /// One JSON object per line
    Jsonl,
    Yaml,
}
