use std::fmt::Write;

use crate::error::Result;
use crate::grouping::GroupedResult;
use crate::record::Record;
use crate::scanner::ScanResult;

use super::{GroupFormatter, ScanFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_record(&self, output: &mut String, indent: &str, record: &Record) {
        writeln!(output, "{indent}{record}").ok();
        if self.verbose > 0 {
            writeln!(
                output,
                "{indent}   {} [{}] {}",
                record.material(),
                record.dataset(),
                record.fullpath().display()
            )
            .ok();
        }
    }
}

impl ScanFormatter for TextFormatter {
    fn format_scan(&self, result: &ScanResult) -> Result<String> {
        let mut output = String::new();
        for record in result.records() {
            self.write_record(&mut output, "", record);
        }

        if !result.is_empty() {
            output.push('\n');
        }
        let count = self.colorize(&result.count().to_string(), ansi::GREEN);
        writeln!(output, "Summary: {count} matching files").ok();
        Ok(output)
    }
}

impl GroupFormatter for TextFormatter {
    fn format_groups(&self, result: &GroupedResult) -> Result<String> {
        let mut output = String::new();
        for (key, records) in result.iter() {
            let header = self.colorize(key, ansi::CYAN);
            writeln!(output, "{header} ({} files)", records.len()).ok();
            for record in records {
                self.write_record(&mut output, "  ", record);
            }
        }

        if !result.is_empty() {
            output.push('\n');
        }
        let groups = self.colorize(&result.len().to_string(), ansi::GREEN);
        writeln!(
            output,
            "Summary: {groups} groups, {} files",
            result.record_count()
        )
        .ok();
        Ok(output)
    }
}
