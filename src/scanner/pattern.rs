use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed LMD naming grammar: `<digits>-<digits>-<alnum> CLL 9F 0<digit>...LMD`.
/// `.` also matches `\n` in the trailing part.
const GRAMMAR: &str = r"(?s)([[:digit:]]+-[[:digit:]]+)-([[:alnum:]]+) CLL 9F 0([[:digit:]]).*\.LMD";

/// Tokens captured from a filename that satisfies the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub label: String,
    pub material: String,
    pub tube_set: u8,
}

/// Trait for turning a bare filename into record metadata.
pub trait NameParser {
    /// Return the captured tokens, or `None` if the name is not part of the inventory.
    fn parse(&self, file_name: &str) -> Option<ParsedName>;
}

/// How the grammar is applied to a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Any substring of the name may satisfy the grammar.
    #[default]
    Substring,
    /// The whole name must satisfy the grammar.
    Anchored,
}

/// Compiled filename grammar.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    regex: Regex,
    mode: MatchMode,
}

impl Default for FilenamePattern {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl FilenamePattern {
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        let source = match mode {
            MatchMode::Substring => GRAMMAR.to_string(),
            MatchMode::Anchored => format!("^(?:{GRAMMAR})$"),
        };
        Self {
            regex: Regex::new(&source).expect("Invalid regex"),
            mode,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }
}

impl NameParser for FilenamePattern {
    fn parse(&self, file_name: &str) -> Option<ParsedName> {
        let caps = self.regex.captures(file_name)?;
        let label = caps.get(1)?.as_str();
        let material = caps.get(2)?.as_str();
        let tube = caps.get(3)?.as_str();

        // exactly one ASCII digit
        let mut chars = tube.chars();
        let tube_set = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }

        Some(ParsedName {
            label: label.to_string(),
            material: material.to_string(),
            tube_set: u8::try_from(tube_set).ok()?,
        })
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
