pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod grouping;
pub mod output;
pub mod record;
pub mod scanner;

pub use error::{FlowDirError, Result};
pub use grouping::{GroupedResult, RecordGrouper, group_by};
pub use record::{Field, Record};
pub use scanner::{DirectoryScanner, RecordScanner, ScanResult};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_EMPTY_RESULT: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
