//! Error types for the Extractor

use thiserror::Error;

/// Errors raised while loading or validating the date configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse JSON
    #[error("Failed to parse config JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Required field present but empty
    #[error("Configuration field is empty: {0}")]
    EmptyField(String),

    /// Field present with an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Path of the offending field
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors that can occur while building or using an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A configured regex pattern does not compile
    #[error("Invalid {pattern} pattern: {source}")]
    PatternCompilation {
        /// Which pattern failed (`year`, `textual_phrase` or `combined`)
        pattern: &'static str,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A configured pattern lacks a named group the extractor reads
    #[error("Pattern {pattern} must declare the named group '{group}'")]
    MissingCaptureGroup {
        /// Which pattern is incomplete
        pattern: &'static str,
        /// Name of the missing group
        group: &'static str,
    },

    /// Report serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Report could not be written
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
