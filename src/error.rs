use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentBarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[source] serde_json::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[source] serde_json::Error),
}

impl SegmentBarError {
    /// Short variant name, used in log records.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidInput(_) => "InvalidInput",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::TomlSerialize(_) => "TomlSerialize",
            Self::JsonParse(_) => "JsonParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentBarError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
