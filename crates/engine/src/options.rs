use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human readable report, one block per file
    #[default]
    Text,
    Json,
    Jsonl,
    Yaml,
}
