mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::grouping::GroupedResult;
use crate::scanner::ScanResult;

/// Trait for rendering a record inventory.
pub trait ScanFormatter {
    /// Format the scanned records into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_scan(&self, result: &ScanResult) -> Result<String>;
}

/// Trait for rendering grouped records.
pub trait GroupFormatter {
    /// Format the groups into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_groups(&self, result: &GroupedResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
