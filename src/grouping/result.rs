use indexmap::IndexMap;

use crate::record::Record;

/// Records bucketed by key. Keys keep the order chosen by the grouper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResult {
    groups: IndexMap<String, Vec<Record>>,
}

impl GroupedResult {
    pub(crate) const fn from_map(groups: IndexMap<String, Vec<Record>>) -> Self {
        Self { groups }
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Group keys in result order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// Flatten back into one collection, group by group.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.groups.into_values().flatten().collect()
    }
}
