//! Partition a record collection by one field, optionally keeping only
//! groups that form a complete tube panel.

mod result;

pub use result::GroupedResult;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::{Field, Record};

/// Rule deciding whether a tube-filtered group is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletenessPolicy {
    /// Group size equals the number of required tubes.
    ///
    /// Duplicated tubes are not detected: `{1, 1, 2}` passes for `{1, 2, 3}`.
    #[default]
    ExactCount,
    /// Exactly one record for every required tube.
    ExactCoverage,
}

impl CompletenessPolicy {
    fn is_complete(self, records: &[Record], tubes: &BTreeSet<u8>) -> bool {
        match self {
            Self::ExactCount => records.len() == tubes.len(),
            Self::ExactCoverage => {
                let seen: BTreeSet<u8> = records.iter().map(Record::tube_set).collect();
                records.len() == tubes.len() && seen == *tubes
            }
        }
    }
}

/// Order of keys in a [`GroupedResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    /// Order in which keys first appear among tube-filtered records.
    #[default]
    FirstSeen,
    /// Lexicographic key order.
    Sorted,
}

/// Groups records by a chosen field.
#[derive(Debug, Clone, Default)]
pub struct RecordGrouper {
    field: Field,
    tubes: BTreeSet<u8>,
    completeness: CompletenessPolicy,
    key_order: KeyOrder,
}

impl RecordGrouper {
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            ..Self::default()
        }
    }

    /// Restrict membership to these tubes and drop incomplete groups.
    /// An empty set disables both.
    #[must_use]
    pub fn with_tubes(mut self, tubes: impl IntoIterator<Item = u8>) -> Self {
        self.tubes = tubes.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn with_completeness(mut self, completeness: CompletenessPolicy) -> Self {
        self.completeness = completeness;
        self
    }

    #[must_use]
    pub const fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    #[must_use]
    pub const fn tubes(&self) -> &BTreeSet<u8> {
        &self.tubes
    }

    /// Bucket `records` by the configured field. The input is left untouched.
    #[must_use]
    pub fn group(&self, records: &[Record]) -> GroupedResult {
        let filter_tubes = !self.tubes.is_empty();
        let mut groups: IndexMap<String, Vec<Record>> = IndexMap::new();

        for record in records {
            if filter_tubes && !self.tubes.contains(&record.tube_set()) {
                continue;
            }
            groups
                .entry(record.field_value(self.field).into_owned())
                .or_default()
                .push(record.clone());
        }

        if filter_tubes {
            let before = groups.len();
            groups.retain(|key, members| {
                let complete = self.completeness.is_complete(members.as_slice(), &self.tubes);
                if !complete {
                    log::debug!(
                        "Dropping incomplete group {key:?} ({} of {} tubes)",
                        members.len(),
                        self.tubes.len()
                    );
                }
                complete
            });
            log::debug!(
                "Kept {} of {before} group(s) with a complete tube set",
                groups.len()
            );
        }

        if self.key_order == KeyOrder::Sorted {
            groups.sort_keys();
        }

        GroupedResult::from_map(groups)
    }
}

/// Group with the default policies: exact-count completeness, first-seen key order.
#[must_use]
pub fn group_by(records: &[Record], field: Field, tubes: &BTreeSet<u8>) -> GroupedResult {
    RecordGrouper::new(field)
        .with_tubes(tubes.iter().copied())
        .group(records)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
