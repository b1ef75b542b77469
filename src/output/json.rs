use serde::Serialize;

use crate::error::Result;
use crate::grouping::GroupedResult;
use crate::record::Record;
use crate::scanner::ScanResult;

use super::{GroupFormatter, ScanFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct ScanOutput<'a> {
    count: usize,
    records: &'a [Record],
}

#[derive(Serialize)]
struct GroupOutput<'a> {
    group_count: usize,
    record_count: usize,
    groups: Vec<GroupEntry<'a>>,
}

#[derive(Serialize)]
struct GroupEntry<'a> {
    key: &'a str,
    records: &'a [Record],
}

impl ScanFormatter for JsonFormatter {
    fn format_scan(&self, result: &ScanResult) -> Result<String> {
        let output = ScanOutput {
            count: result.count(),
            records: result.records(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl GroupFormatter for JsonFormatter {
    fn format_groups(&self, result: &GroupedResult) -> Result<String> {
        let output = GroupOutput {
            group_count: result.len(),
            record_count: result.record_count(),
            groups: result
                .iter()
                .map(|(key, records)| GroupEntry { key, records })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
