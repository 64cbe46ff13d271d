// Configuration type definitions

use serde::Deserialize;

use crate::dialect::{Dialect, DelimiterChar, QuoteChar};

/// Output format for the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-column text table
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// `[dialect]` section: default quote and delimiter characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct DialectConfig {
    #[serde(default)]
    pub delimiter: DelimiterChar,
    #[serde(default)]
    pub quote: QuoteChar,
}

impl DialectConfig {
    pub fn dialect(&self) -> Dialect {
        Dialect::new(self.quote, self.delimiter)
    }
}

/// `[output]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dialect: DialectConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
