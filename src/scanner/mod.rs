mod pattern;

pub use pattern::{FilenamePattern, MatchMode, NameParser, ParsedName};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::record::Record;

/// Records found by one or more scans, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    records: Vec<Record>,
}

impl ScanResult {
    /// Number of matched files.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Append another scan's records after this one's.
    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
    }
}

impl From<Vec<Record>> for ScanResult {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

/// One root directory and the dataset tag attached to everything found under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSource {
    pub root: PathBuf,
    pub dataset: String,
}

impl ScanSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, dataset: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            dataset: dataset.into(),
        }
    }
}

/// Trait for building a record collection from a directory tree.
pub trait RecordScanner {
    /// Scan `root` and tag every record with `dataset`.
    ///
    /// Never fails: unreadable directories contribute no records.
    fn scan(&self, root: &Path, dataset: &str) -> ScanResult;

    /// Scan each source in order and concatenate the results.
    fn scan_sources(&self, sources: &[ScanSource]) -> ScanResult {
        let mut result = ScanResult::default();
        for source in sources {
            result.extend(self.scan(&source.root, &source.dataset));
        }
        result
    }
}

/// Scans `<root>/<group>/<file>` trees, one level of subdirectories deep.
///
/// Top-level entries starting with `.` are skipped. Every other top-level
/// entry is treated as a group directory; entries that cannot be listed
/// (plain files, permission errors) are skipped silently.
pub struct DirectoryScanner<P: NameParser = FilenamePattern> {
    parser: P,
    sort_entries: bool,
}

impl Default for DirectoryScanner<FilenamePattern> {
    fn default() -> Self {
        Self::new(FilenamePattern::default())
    }
}

impl<P: NameParser> DirectoryScanner<P> {
    #[must_use]
    pub const fn new(parser: P) -> Self {
        Self {
            parser,
            sort_entries: false,
        }
    }

    /// Sort entries by file name at both levels instead of using filesystem order.
    #[must_use]
    pub const fn with_sorted_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    fn scan_impl(&self, root: &Path, dataset: &str) -> ScanResult {
        let mut records = Vec::new();

        for group_entry in self.children(root) {
            let group = group_entry.file_name().to_string_lossy();
            if group.starts_with('.') {
                continue;
            }

            let group_path = group_entry.path();
            let before = records.len();
            for file_entry in self.children(group_path) {
                if let Some(record) = self.parse_entry(file_entry, &group, dataset) {
                    records.push(record);
                }
            }
            log::trace!(
                "{} matched {} file(s)",
                group_path.display(),
                records.len() - before
            );
        }

        log::debug!(
            "Scanned {} ({dataset}): {} record(s)",
            root.display(),
            records.len()
        );
        ScanResult { records }
    }

    fn parse_entry(&self, entry: DirEntry, group: &str, dataset: &str) -> Option<Record> {
        // captures are ASCII, so lossy decoding only touches the unmatched bytes
        let parsed = self.parser.parse(&entry.file_name().to_string_lossy())?;
        Some(Record::from_match(parsed, group, entry.into_path(), dataset))
    }

    /// Immediate children of `dir`; the handle is dropped when iteration ends.
    fn children(&self, dir: &Path) -> impl Iterator<Item = DirEntry> {
        let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }
        walker.into_iter().filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Skipping unreadable entry: {err}");
                None
            }
        })
    }
}

impl<P: NameParser> RecordScanner for DirectoryScanner<P> {
    fn scan(&self, root: &Path, dataset: &str) -> ScanResult {
        self.scan_impl(root, dataset)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
