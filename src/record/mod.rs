//! Parsed description of one matched LMD file.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::scanner::ParsedName;

/// One matched file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "filepath", serialize_with = "serialize_path")]
    fullpath: PathBuf,
    group: String,
    label: String,
    material: String,
    tube_set: u8,
    dataset: String,
}

impl Record {
    /// Build a record directly, e.g. for synthetic collections.
    #[must_use]
    pub fn new(
        fullpath: impl Into<PathBuf>,
        group: impl Into<String>,
        label: impl Into<String>,
        material: impl Into<String>,
        tube_set: u8,
        dataset: impl Into<String>,
    ) -> Self {
        Self {
            fullpath: fullpath.into(),
            group: group.into(),
            label: label.into(),
            material: material.into(),
            tube_set,
            dataset: dataset.into(),
        }
    }

    /// Build a record from a filename that matched the grammar.
    #[must_use]
    pub fn from_match(parsed: ParsedName, group: &str, fullpath: PathBuf, dataset: &str) -> Self {
        Self {
            fullpath,
            group: group.to_string(),
            label: parsed.label,
            material: parsed.material,
            tube_set: parsed.tube_set,
            dataset: dataset.to_string(),
        }
    }

    #[must_use]
    pub fn fullpath(&self) -> &Path {
        &self.fullpath
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    #[must_use]
    pub const fn tube_set(&self) -> u8 {
        self.tube_set
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Value of `field` as a grouping key. The tube set renders as its digit.
    #[must_use]
    pub fn field_value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Fullpath => self.fullpath.to_string_lossy(),
            Field::Group => Cow::Borrowed(&self.group),
            Field::Label => Cow::Borrowed(&self.label),
            Field::Material => Cow::Borrowed(&self.material),
            Field::TubeSet => Cow::Owned(self.tube_set.to_string()),
            Field::Dataset => Cow::Borrowed(&self.dataset),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}; Set {}", self.group, self.label, self.tube_set)
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_path<S: serde::Serializer>(
    path: &PathBuf,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Selects one of the six record fields, e.g. as the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Path of the matched file
    #[value(alias = "filepath")]
    #[serde(alias = "filepath")]
    Fullpath,
    /// Immediate parent subdirectory
    #[default]
    Group,
    /// Leading `digits-digits` run id
    Label,
    /// Alphanumeric material id
    Material,
    /// Tube number (single digit)
    #[value(alias = "tube_set")]
    #[serde(alias = "tube_set")]
    TubeSet,
    /// Caller-supplied scan batch tag
    Dataset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fullpath => "fullpath",
            Self::Group => "group",
            Self::Label => "label",
            Self::Material => "material",
            Self::TubeSet => "tube-set",
            Self::Dataset => "dataset",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
