use serde::{Deserialize, Serialize};

use crate::grouping::{CompletenessPolicy, KeyOrder};
use crate::record::Field;
use crate::scanner::MatchMode;

/// Highest tube number the filename grammar can produce.
pub const MAX_TUBE: u8 = 9;

/// Top-level configuration loaded from `.flowdir.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub group: GroupConfig,
}

/// Directory scan settings [scan].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Apply the filename grammar to any substring or to the whole name.
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Sort directory entries by name instead of filesystem order.
    #[serde(default)]
    pub sort_entries: bool,
}

/// Grouping settings [group].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Field used as group key.
    #[serde(default)]
    pub by: Field,

    /// Required tube numbers. Empty disables tube filtering.
    #[serde(default)]
    pub tubes: Vec<u8>,

    #[serde(default)]
    pub completeness: CompletenessPolicy,

    #[serde(default)]
    pub key_order: KeyOrder,
}
