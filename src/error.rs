use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the configuration, output and command surfaces.
///
/// Scanning and grouping never fail: an unreadable directory or a filename
/// outside the grammar simply contributes nothing to the result.
#[derive(Error, Debug)]
pub enum FlowDirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FlowDirError {
    /// Short machine-friendly name of the error category.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::RootNotFound(_) => "RootNotFound",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Hint printed under the error message, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `flowdir init` for a template")
            }
            Self::RootNotFound(_) => {
                Some("Check that the root directory exists, or drop --require-root")
            }
            Self::FileAccess { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::TomlSerialize(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowDirError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
