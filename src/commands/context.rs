//! Helpers shared by the scanning commands.

use std::fs;
use std::path::Path;

use log::LevelFilter;

use crate::cli::{ColorChoice, ScanOptions};
use crate::config::{Config, ConfigLoader, FileConfigLoader, ScanConfig};
use crate::error::{FlowDirError, Result};
use crate::output::ColorMode;
use crate::scanner::{
    DirectoryScanner, FilenamePattern, MatchMode, RecordScanner, ScanResult, ScanSource,
};
use crate::{EXIT_EMPTY_RESULT, EXIT_SUCCESS};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Log level for the `-v` count; `--quiet` keeps errors only.
#[must_use]
pub const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Load configuration from an explicit path, the default locations, or not at all.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Dataset tag for `root`: the explicit tag, else the root's directory name.
fn dataset_for(root: &Path, explicit: Option<&str>) -> String {
    if let Some(tag) = explicit {
        return tag.to_string();
    }
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

/// Pair each root with its dataset tag and check the roots exist.
///
/// A missing root only logs a warning unless `--require-root` is set; the scan
/// itself would report it as an empty tree.
///
/// # Errors
/// Returns an error for an empty dataset tag, or a missing root with `--require-root`.
pub fn resolve_sources(options: &ScanOptions) -> Result<Vec<ScanSource>> {
    if options.dataset.as_deref().is_some_and(str::is_empty) {
        return Err(FlowDirError::Config(
            "dataset tag must not be empty".to_string(),
        ));
    }

    let mut sources = Vec::with_capacity(options.roots.len());
    for root in &options.roots {
        if !root.is_dir() {
            if options.require_root {
                return Err(FlowDirError::RootNotFound(root.clone()));
            }
            log::warn!("Root directory {} does not exist", root.display());
        }
        sources.push(ScanSource::new(
            root.clone(),
            dataset_for(root, options.dataset.as_deref()),
        ));
    }
    Ok(sources)
}

/// Scanner configured from the config file with CLI overrides applied.
#[must_use]
pub fn build_scanner(options: &ScanOptions, config: &ScanConfig) -> DirectoryScanner {
    let mode = if options.anchored {
        MatchMode::Anchored
    } else {
        config.match_mode
    };
    DirectoryScanner::new(FilenamePattern::new(mode))
        .with_sorted_entries(options.sort || config.sort_entries)
}

/// Resolve the roots and scan all of them.
///
/// # Errors
/// Returns an error if the roots fail validation.
pub fn scan_roots(options: &ScanOptions, config: &ScanConfig) -> Result<ScanResult> {
    let sources = resolve_sources(options)?;
    let scanner = build_scanner(options, config);
    let result = scanner.scan_sources(&sources);
    log::info!(
        "Found {} matching file(s) under {} root(s)",
        result.count(),
        sources.len()
    );
    Ok(result)
}

/// Write to a file if given, else to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| FlowDirError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote output to {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[must_use]
pub const fn exit_code(is_empty: bool, fail_on_empty: bool) -> i32 {
    if is_empty && fail_on_empty {
        EXIT_EMPTY_RESULT
    } else {
        EXIT_SUCCESS
    }
}

/// Print an error with its hint, if any.
pub fn report_error(err: &FlowDirError) {
    eprintln!("Error: {err}");
    if let Some(suggestion) = err.suggestion() {
        eprintln!("  Hint: {suggestion}");
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
